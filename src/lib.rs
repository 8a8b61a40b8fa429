//! Canvas route table and its HTTP front.

pub mod config;
pub mod dispatch;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::RouterConfig;
pub use http::HttpServer;
pub use lifecycle::{Application, Shutdown};
pub use routing::{HttpMethod, RouteError, RouteTable};
