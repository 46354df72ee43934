//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Define wiki metrics (requests, latency, page saves)
//! - Expose a Prometheus-compatible scrape endpoint
//!
//! # Metrics
//! - `wiki_requests_total` (counter): total requests by method, status
//! - `wiki_request_duration_seconds` (histogram): latency by method
//! - `wiki_page_saves_total` (counter): successful page saves
//!
//! # Design Decisions
//! - Recording is a no-op until an exporter is installed
//! - Labels kept low-cardinality (no titles)

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use std::net::SocketAddr;
use std::time::Instant;

pub const REQUESTS_TOTAL: &str = "wiki_requests_total";
pub const REQUEST_DURATION: &str = "wiki_request_duration_seconds";
pub const PAGE_SAVES_TOTAL: &str = "wiki_page_saves_total";

/// Install the Prometheus recorder and its HTTP listener on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one completed request.
pub fn record_request(method: &str, status: u16, start: Instant) {
    metrics::counter!(
        REQUESTS_TOTAL,
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!(REQUEST_DURATION, "method" => method.to_string())
        .record(start.elapsed().as_secs_f64());
}

/// Record a successful page save.
pub fn record_page_save() {
    metrics::counter!(PAGE_SAVES_TOTAL).increment(1);
}
