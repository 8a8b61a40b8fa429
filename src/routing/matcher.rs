//! Path pattern matching.
//!
//! # Responsibilities
//! - Normalize registered patterns and incoming request paths
//! - Reject dynamic segments at registration time
//! - Compare a normalized request path against a pattern
//!
//! # Design Decisions
//! - Literal segments only: `:param`, `*glob` and `(optional)` are refused
//! - Matching is case-sensitive
//! - Repeated and trailing slashes are insignificant (`/canvas//new/` == `/canvas/new`)
//! - Query string and fragment never take part in matching

use std::fmt;

use crate::routing::error::RouteError;

/// A normalized, literal-only path pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathPattern {
    normalized: String,
}

impl PathPattern {
    /// Validate and normalize a pattern.
    pub fn parse(pattern: &str) -> Result<Self, RouteError> {
        if pattern.trim().is_empty() {
            return Err(RouteError::EmptyPath);
        }

        for segment in pattern.split('/') {
            if segment.starts_with(':')
                || segment.starts_with('*')
                || segment.contains(['(', ')', '?', '#'])
                || segment.contains(char::is_whitespace)
            {
                return Err(RouteError::UnsupportedSegment {
                    pattern: pattern.to_string(),
                    segment: segment.to_string(),
                });
            }
        }

        Ok(Self {
            normalized: normalize_path(pattern),
        })
    }

    /// Returns true if the already-normalized request path equals this pattern.
    pub fn matches(&self, normalized_path: &str) -> bool {
        self.normalized == normalized_path
    }

    pub fn as_str(&self) -> &str {
        &self.normalized
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

/// Normalize a request path: drop query and fragment, collapse slashes,
/// strip the trailing slash. The root normalizes to `/`.
pub fn normalize_path(path: &str) -> String {
    let path = path
        .split_once(['?', '#'])
        .map(|(p, _)| p)
        .unwrap_or(path);

    let mut normalized = String::with_capacity(path.len() + 1);
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        normalized.push('/');
        normalized.push_str(segment);
    }

    if normalized.is_empty() {
        normalized.push('/');
    }
    normalized
}

/// Join a scope prefix and a sub-path into one pattern string.
pub fn join_paths(prefix: &str, path: &str) -> String {
    format!(
        "{}/{}",
        prefix.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
