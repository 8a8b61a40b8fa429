//! Metrics collection and exposition.
//!
//! # Metrics
//! - `router_requests_total` (counter): requests by method, status, handler
//! - `router_request_duration_seconds` (histogram): latency by handler
//!
//! Without an installed recorder every call here is a no-op.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::routing::HttpMethod;

/// Install the Prometheus recorder and its scrape listener on `addr`.
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Label for a request verb. Anything outside the routed set is `OTHER`,
/// so client-chosen extension methods cannot mint new series.
pub fn method_label(method: &str) -> &'static str {
    method
        .parse::<HttpMethod>()
        .map(|m| m.as_str())
        .unwrap_or("OTHER")
}

/// Record one routed request. `handler` is `none` when nothing matched.
pub fn record_request(method: &str, status: u16, handler: &str, start: Instant) {
    metrics::counter!(
        "router_requests_total",
        "method" => method_label(method),
        "status" => status.to_string(),
        "handler" => handler.to_string()
    )
    .increment(1);
    metrics::histogram!("router_request_duration_seconds", "handler" => handler.to_string())
        .record(start.elapsed().as_secs_f64());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(rendered: &str) -> Vec<&str> {
        rendered
            .lines()
            .filter(|line| line.starts_with("router_requests_total{"))
            .collect()
    }

    #[test]
    fn test_method_label() {
        assert_eq!(method_label("GET"), "GET");
        assert_eq!(method_label("HEAD"), "HEAD");
        assert_eq!(method_label("X1"), "OTHER");
        assert_eq!(method_label("get"), "OTHER");
    }

    #[test]
    fn test_extension_methods_share_one_series() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            for i in 0..50 {
                record_request(&format!("X{}", i), 404, "none", Instant::now());
            }
            record_request("GET", 404, "none", Instant::now());
        });

        let rendered = handle.render();
        let lines = series(&rendered);
        assert_eq!(lines.len(), 2, "unexpected series: {:?}", lines);
        assert!(lines.iter().any(|l| l.contains("method=\"OTHER\"") && l.ends_with(" 50")));
        assert!(lines.iter().any(|l| l.contains("method=\"GET\"")));
    }
}
