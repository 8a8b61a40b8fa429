//! HTTP front for the route table.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID)
//!     → routing::RouteTable::resolve (handler name or NotFound)
//!     → dispatch::ActionRegistry (run the action)
//!     → response.rs (errors to status codes)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestIdExt, RequestUuid, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
