//! Routing error definitions.

use thiserror::Error;

/// Errors raised while registering or resolving routes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// No entry matches the request.
    #[error("No route matches [{method}] \"{path}\"")]
    NotFound { method: String, path: String },

    /// Verb outside the recognized set.
    #[error("Unknown HTTP method: {0}")]
    UnknownMethod(String),

    /// Path pattern was empty.
    #[error("Route path pattern must not be empty")]
    EmptyPath,

    /// Handler is not of the form `resource#action`.
    #[error("Invalid handler '{0}', expected 'resource#action'")]
    InvalidHandler(String),

    /// Pattern contains a dynamic segment (`:id`, `*glob`).
    #[error("Unsupported segment '{segment}' in pattern '{pattern}'; only literal segments are allowed")]
    UnsupportedSegment { pattern: String, segment: String },

    /// Explicit route name already taken by an earlier entry.
    #[error("Route name '{0}' is already in use")]
    DuplicateName(String),
}

/// Result type for routing operations.
pub type RouteResult<T> = Result<T, RouteError>;
