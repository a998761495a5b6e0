//! Metrics collection and exposition.
//!
//! # Metrics
//! - `site_requests_total` (counter): requests by route, method, status
//! - `site_request_duration_seconds` (histogram): latency by route
//! - `site_route_misses_total` (counter): requests no route claimed
//!
//! # Design Decisions
//! - Recording is a no-op until an exporter is installed
//! - Route label is the route name, or "none" on a miss

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter listening on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record a served request.
pub fn record_request(method: &str, status: u16, route: &str, start: Instant) {
    counter!(
        "site_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string(),
        "route" => route.to_string()
    )
    .increment(1);
    histogram!("site_request_duration_seconds", "route" => route.to_string())
        .record(start.elapsed().as_secs_f64());
}

/// Record a request that matched no route.
pub fn record_route_miss() {
    counter!("site_route_misses_total").increment(1);
}
