//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Check every configured route the way the route builder would
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::schema::RouterConfig;
use crate::routing::{canvas_routes, HandlerName, HttpMethod, PathPattern, RouteError};

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a socket address")]
    BindAddress(String),

    #[error("observability.metrics_address '{0}' is not a socket address")]
    MetricsAddress(String),

    #[error("observability.log_level '{0}' is not a valid filter")]
    LogLevel(String),

    #[error("timeouts.request_secs must be greater than zero")]
    RequestTimeout,

    #[error("routes[{index}]: {source}")]
    Route {
        index: usize,
        #[source]
        source: RouteError,
    },
}

pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.listener.bind_address.clone()));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::RequestTimeout);
    }

    let observability = &config.observability;
    if EnvFilter::try_new(&observability.log_level).is_err() {
        errors.push(ValidationError::LogLevel(observability.log_level.clone()));
    }
    if observability.metrics_enabled && observability.metrics_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::MetricsAddress(observability.metrics_address.clone()));
    }

    // Configured routes are appended after the canvas routes, so their names are taken.
    let mut names: HashSet<String> = canvas_routes()
        .map(|table| {
            table
                .entries()
                .iter()
                .filter_map(|e| e.name().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();
    for (index, route) in config.routes.iter().enumerate() {
        let checks = [
            route.method.parse::<HttpMethod>().err(),
            PathPattern::parse(&route.path).err(),
            HandlerName::new(route.to.as_str()).err(),
            match &route.name {
                Some(name) if !names.insert(name.clone()) => {
                    Some(RouteError::DuplicateName(name.clone()))
                }
                _ => None,
            },
        ];
        errors.extend(
            checks
                .into_iter()
                .flatten()
                .map(|source| ValidationError::Route { index, source }),
        );
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
