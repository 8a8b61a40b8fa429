//! Handler identifiers (`resource#action`).

use std::fmt;
use std::str::FromStr;

use crate::routing::error::RouteError;

/// A validated `resource#action` reference to an external action.
///
/// The resource part may carry a namespace path (`admin/canvas#new`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HandlerName {
    raw: String,
    split: usize,
}

impl HandlerName {
    pub fn new(raw: impl Into<String>) -> Result<Self, RouteError> {
        let raw = raw.into();
        let mut parts = raw.match_indices('#');
        let split = match (parts.next(), parts.next()) {
            (Some((idx, _)), None) => idx,
            _ => return Err(RouteError::InvalidHandler(raw)),
        };

        let (resource, action) = (&raw[..split], &raw[split + 1..]);
        let valid = |s: &str| {
            !s.is_empty() && !s.starts_with('/') && !s.ends_with('/') && !s.contains(char::is_whitespace)
        };
        if !valid(resource) || !valid(action) || action.contains('/') {
            return Err(RouteError::InvalidHandler(raw));
        }

        Ok(Self { raw, split })
    }

    /// Controller part, e.g. `canvas`.
    pub fn resource(&self) -> &str {
        &self.raw[..self.split]
    }

    /// Action part, e.g. `new`.
    pub fn action(&self) -> &str {
        &self.raw[self.split + 1..]
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for HandlerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for HandlerName {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_resource_and_action() {
        let handler = HandlerName::new("canvas#release").unwrap();
        assert_eq!(handler.resource(), "canvas");
        assert_eq!(handler.action(), "release");
        assert_eq!(handler.to_string(), "canvas#release");
    }

    #[test]
    fn test_namespaced_resource() {
        let handler: HandlerName = "admin/canvas#new".parse().unwrap();
        assert_eq!(handler.resource(), "admin/canvas");
        assert_eq!(handler.action(), "new");
    }

    #[test]
    fn test_rejects_malformed() {
        for raw in ["canvas", "#new", "canvas#", "a#b#c", "canvas#n ew", "canvas#a/b", "/canvas#new"] {
            assert_eq!(
                HandlerName::new(raw),
                Err(RouteError::InvalidHandler(raw.to_string())),
                "{raw} should be rejected"
            );
        }
    }
}
