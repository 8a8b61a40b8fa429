//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with a single dispatching fallback
//! - Wire up middleware (timeout, request ID, tracing)
//! - Resolve every request against the frozen route table
//! - Hand matched requests to the action registry
//! - Record request metrics

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::{IntoResponse, Response},
    Router,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::RouterConfig;
use crate::dispatch::{ActionContext, ActionRegistry};
use crate::http::request::{propagate_request_id_layer, set_request_id_layer, RequestIdExt};
use crate::lifecycle::signals::shutdown_signal;
use crate::observability::metrics;
use crate::routing::{HttpMethod, RouteError, RouteTable};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
    pub actions: Arc<ActionRegistry>,
}

/// HTTP server serving a frozen route table.
pub struct HttpServer {
    router: Router,
    config: RouterConfig,
}

impl HttpServer {
    /// Create a new HTTP server over an already-built table and registry.
    pub fn new(config: RouterConfig, routes: Arc<RouteTable>, actions: Arc<ActionRegistry>) -> Self {
        let state = AppState { routes, actions };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &RouterConfig, state: AppState) -> Router {
        Router::new()
            .fallback(dispatch_handler)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http())
            .layer(set_request_id_layer())
    }

    /// Run the server until Ctrl+C or a message on `shutdown`.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The fully layered router, for in-process use.
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }
}

/// Resolves the request and dispatches to the matching action.
async fn dispatch_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let request_id = request.request_id().to_string();
    let method = request.method().as_str().to_string();
    let path = request.uri().path().to_string();
    let query = request.uri().query().map(str::to_string);

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        path = %path,
        "Routing request"
    );

    let resolved = method
        .parse::<HttpMethod>()
        .map_err(|_| RouteError::NotFound {
            method: method.clone(),
            path: path.clone(),
        })
        .and_then(|verb| {
            state
                .routes
                .resolve_entry(verb, &path)
                .map(|entry| (verb, entry))
        });

    let (verb, entry) = match resolved {
        Ok(found) => found,
        Err(err) => {
            tracing::debug!(request_id = %request_id, method = %method, path = %path, "No route matched");
            metrics::record_request(&method, 404, "none", start_time);
            return err.into_response();
        }
    };

    let handler = entry.handler().clone();
    let ctx = ActionContext {
        method: verb,
        path,
        query,
        handler: handler.clone(),
        route_name: entry.name().map(str::to_string),
        request_id: request_id.clone(),
    };

    let response = match state.actions.dispatch(ctx).await {
        Ok(response) => response,
        Err(err) => {
            tracing::error!(request_id = %request_id, handler = %handler, error = %err, "Dispatch failed");
            err.into_response()
        }
    };

    metrics::record_request(&method, response.status().as_u16(), handler.as_str(), start_time);
    response
}
