//! Handler name → action registry.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use axum::response::Response;
use thiserror::Error;

use crate::routing::{HandlerName, HttpMethod, RouteResult, RouteTable};

/// Boxed future returned by an action.
pub type ActionFuture = Pin<Box<dyn Future<Output = Response> + Send>>;

/// A controller action, shared across requests.
pub type Action = Arc<dyn Fn(ActionContext) -> ActionFuture + Send + Sync>;

/// What an action gets to see about the matched request.
#[derive(Debug, Clone)]
pub struct ActionContext {
    /// Verb of the incoming request (may be HEAD for a GET route).
    pub method: HttpMethod,
    /// Request path as received, without the query string.
    pub path: String,
    pub query: Option<String>,
    pub handler: HandlerName,
    pub route_name: Option<String>,
    pub request_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The route resolved but nothing is registered for its handler.
    #[error("No action registered for '{0}'")]
    ActionMissing(HandlerName),
}

/// Registry of actions keyed by handler name.
#[derive(Clone, Default)]
pub struct ActionRegistry {
    actions: HashMap<HandlerName, Action>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `f` as the action for `handler`. A later registration for the
    /// same handler replaces the earlier one.
    pub fn register<F, Fut>(&mut self, handler: &str, f: F) -> RouteResult<&mut Self>
    where
        F: Fn(ActionContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        let handler = HandlerName::new(handler)?;
        let action: Action = Arc::new(move |ctx: ActionContext| -> ActionFuture { Box::pin(f(ctx)) });
        if self.actions.insert(handler.clone(), action).is_some() {
            tracing::warn!(handler = %handler, "Action replaced");
        }
        Ok(self)
    }

    pub fn get(&self, handler: &HandlerName) -> Option<&Action> {
        self.actions.get(handler)
    }

    pub fn contains(&self, handler: &HandlerName) -> bool {
        self.actions.contains_key(handler)
    }

    /// Run the action for `ctx.handler`.
    pub async fn dispatch(&self, ctx: ActionContext) -> Result<Response, DispatchError> {
        let action = self
            .get(&ctx.handler)
            .cloned()
            .ok_or_else(|| DispatchError::ActionMissing(ctx.handler.clone()))?;
        Ok(action(ctx).await)
    }

    /// Handlers referenced by `table` that have no action, in table order.
    pub fn missing<'t>(&self, table: &'t RouteTable) -> Vec<&'t HandlerName> {
        let mut missing: Vec<&HandlerName> = Vec::new();
        for entry in table.entries() {
            let handler = entry.handler();
            if !self.contains(handler) && !missing.contains(&handler) {
                missing.push(handler);
            }
        }
        missing
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut handlers: Vec<&str> = self.actions.keys().map(HandlerName::as_str).collect();
        handlers.sort_unstable();
        f.debug_struct("ActionRegistry").field("handlers", &handlers).finish()
    }
}
