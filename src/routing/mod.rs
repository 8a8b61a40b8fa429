//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     canvas.rs (draw_canvas_routes) + configured routes
//!     → router.rs (RouteTableBuilder: validate, normalize, append)
//!     → build() freezes an immutable RouteTable
//!     → shared via Arc with the HTTP front
//!
//! Incoming request (method, path):
//!     → matcher.rs (normalize path)
//!     → router.rs (first entry in registration order)
//!     → Return: handler name (`resource#action`) or NotFound
//! ```
//!
//! # Design Decisions
//! - Routes registered at startup, immutable at runtime
//! - Literal segments only, no regex or parameters
//! - Deterministic: same input always matches same route
//! - First match wins (registration order)

pub mod canvas;
pub mod error;
pub mod handler;
pub mod matcher;
pub mod method;
pub mod router;

pub use canvas::{canvas_routes, draw_canvas_routes};
pub use error::{RouteError, RouteResult};
pub use handler::HandlerName;
pub use matcher::PathPattern;
pub use method::HttpMethod;
pub use router::{RouteEntry, RouteTable, RouteTableBuilder, Scope};
