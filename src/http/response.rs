//! Error → HTTP response mapping.
//!
//! # Design Decisions
//! - `NotFound` (and verbs we never route) become 404
//! - A resolved route without an action is a 500; the detail stays in the logs

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::dispatch::DispatchError;
use crate::routing::RouteError;

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        let status = match self {
            RouteError::NotFound { .. } | RouteError::UnknownMethod(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}

impl IntoResponse for DispatchError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::HandlerName;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = RouteError::NotFound {
            method: "GET".into(),
            path: "/unknown".into(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = RouteError::UnknownMethod("BREW".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_dispatch_error_maps_to_500() {
        let handler = HandlerName::new("canvas#new").unwrap();
        let response = DispatchError::ActionMissing(handler).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
