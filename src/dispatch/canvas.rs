//! Default canvas actions.
//!
//! The real `new` and `release` controller bodies live outside this crate.
//! These defaults acknowledge the dispatch so the route table can be served
//! and exercised end to end.

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::dispatch::registry::{ActionContext, ActionRegistry};
use crate::routing::RouteResult;

#[derive(Debug, Serialize)]
pub struct Dispatched {
    pub controller: String,
    pub action: String,
    pub path: String,
    pub route: Option<String>,
}

impl From<ActionContext> for Dispatched {
    fn from(ctx: ActionContext) -> Self {
        Self {
            controller: ctx.handler.resource().to_string(),
            action: ctx.handler.action().to_string(),
            path: ctx.path,
            route: ctx.route_name,
        }
    }
}

async fn acknowledge(ctx: ActionContext) -> Response {
    tracing::info!(
        request_id = %ctx.request_id,
        handler = %ctx.handler,
        "Dispatched to default canvas action"
    );
    Json(Dispatched::from(ctx)).into_response()
}

/// Register `canvas#new` and `canvas#release`.
pub fn register_canvas_actions(registry: &mut ActionRegistry) -> RouteResult<()> {
    registry
        .register("canvas#new", acknowledge)?
        .register("canvas#release", acknowledge)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::canvas_routes;

    #[test]
    fn test_canvas_actions_cover_canvas_routes() {
        let mut registry = ActionRegistry::new();
        register_canvas_actions(&mut registry).unwrap();

        let table = canvas_routes().unwrap();
        assert!(registry.missing(&table).is_empty());
        assert_eq!(registry.len(), 2);
    }
}
