//! Metrics collection and exposition.
//!
//! # Metrics
//! - `monkeylines_messages_total` (counter): generated text by kind
//! - `monkeylines_http_requests_total` (counter): requests by route, status
//! - `monkeylines_http_request_duration_seconds` (histogram): handler latency
//! - `monkeylines_tcp_connections_total` (counter): TCP clients by outcome
//! - `monkeylines_tcp_active_connections` (gauge): TCP clients being served
//!
//! Recording is a no-op until [`init_metrics`] installs the exporter.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape endpoint on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

pub fn record_message(kind: &'static str) {
    counter!("monkeylines_messages_total", "kind" => kind).increment(1);
}

pub fn record_http_request(route: String, status: u16, start: Instant) {
    counter!(
        "monkeylines_http_requests_total",
        "route" => route.clone(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("monkeylines_http_request_duration_seconds", "route" => route)
        .record(start.elapsed().as_secs_f64());
}

pub fn tcp_connection_opened() {
    gauge!("monkeylines_tcp_active_connections").increment(1.0);
}

pub fn tcp_connection_closed(outcome: &'static str) {
    gauge!("monkeylines_tcp_active_connections").decrement(1.0);
    counter!("monkeylines_tcp_connections_total", "outcome" => outcome).increment(1);
}
