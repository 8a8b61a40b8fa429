//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the route table from the canvas routes plus configured routes
//! - Register the actions the table dispatches to
//! - Start the metrics endpoint when enabled
//! - Bind the listener and begin accepting traffic
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Subsystems initialize in order, not concurrently
//! - Listener starts last (traffic only when the table is frozen)

use std::net::SocketAddr;
use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;

use crate::config::RouterConfig;
use crate::dispatch::{register_canvas_actions, ActionRegistry};
use crate::http::HttpServer;
use crate::observability::metrics;
use crate::routing::{draw_canvas_routes, RouteError, RouteTable};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Route setup failed: {0}")]
    Route(#[from] RouteError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid address '{0}'")]
    Address(String),

    #[error("Metrics setup failed: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),
}

/// Canvas routes first, then configured routes in file order.
pub fn build_route_table(config: &RouterConfig) -> Result<RouteTable, RouteError> {
    let mut builder = RouteTable::builder();
    draw_canvas_routes(&mut builder)?;

    for route in &config.routes {
        builder.route(
            route.method.parse()?,
            &route.path,
            &route.to,
            route.name.as_deref(),
        )?;
    }

    Ok(builder.build())
}

/// The default action set.
pub fn build_actions() -> Result<ActionRegistry, RouteError> {
    let mut actions = ActionRegistry::new();
    register_canvas_actions(&mut actions)?;
    Ok(actions)
}

/// The `routes` command: the table as a printable listing.
pub fn route_listing(config: &RouterConfig) -> Result<String, RouteError> {
    Ok(build_route_table(config)?.to_string())
}

/// The `resolve` command: the handler for `method path`, or `NotFound`.
pub fn resolve_command(config: &RouterConfig, method: &str, path: &str) -> Result<String, RouteError> {
    let table = build_route_table(config)?;
    let entry = table.resolve_raw(method, path)?;
    Ok(entry.handler().to_string())
}

/// Everything the server needs, assembled once.
pub struct Application {
    pub config: RouterConfig,
    pub routes: Arc<RouteTable>,
    pub actions: Arc<ActionRegistry>,
}

impl Application {
    pub fn from_config(config: RouterConfig) -> Result<Self, StartupError> {
        let routes = build_route_table(&config)?;
        let actions = build_actions()?;

        for handler in actions.missing(&routes) {
            tracing::warn!(handler = %handler, "Route handler has no registered action");
        }

        tracing::info!(
            routes = routes.len(),
            actions = actions.len(),
            "Route table built"
        );

        Ok(Self {
            config,
            routes: Arc::new(routes),
            actions: Arc::new(actions),
        })
    }

    /// Bind the configured address and serve until shutdown.
    pub async fn serve(self, shutdown: broadcast::Receiver<()>) -> Result<(), StartupError> {
        let listener = TcpListener::bind(&self.config.listener.bind_address).await?;
        self.serve_on(listener, shutdown).await
    }

    /// Serve on an already-bound listener until shutdown.
    pub async fn serve_on(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), StartupError> {
        let observability = &self.config.observability;
        if observability.metrics_enabled {
            let addr: SocketAddr = observability
                .metrics_address
                .parse()
                .map_err(|_| StartupError::Address(observability.metrics_address.clone()))?;
            metrics::init_metrics(addr)?;
        }

        let local_addr = listener.local_addr()?;
        tracing::info!(
            address = %local_addr,
            request_timeout_secs = self.config.timeouts.request_secs,
            "Listening for connections"
        );

        let server = HttpServer::new(self.config, self.routes, self.actions);
        server.run(listener, shutdown).await?;
        Ok(())
    }
}
