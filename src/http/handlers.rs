//! Route handlers. Each calls exactly one generator operation.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use serde_json::json;

use crate::generator::{self, Exchange};
use crate::http::page::{host_without_port, IndexPage};
use crate::http::request::RequestMeta;
use crate::http::server::AppState;
use crate::observability::metrics;

/// `GET /`: HTML page around one generated message.
pub async fn index(State(state): State<AppState>, meta: RequestMeta) -> Html<String> {
    let (kind, message) = generator::generate_message_with_kind();
    metrics::record_message(kind.as_str());

    let host = meta.host.as_deref().map(host_without_port).unwrap_or("localhost");
    let html = IndexPage {
        message: &message,
        tcp_host: host,
        tcp_port: state.tcp_port,
    }
    .render();

    tracing::info!(
        request_id = %meta.request_id,
        method = %meta.method,
        path = %meta.path,
        peer_addr = %meta.peer_display(),
        message = %message,
        "Served page"
    );
    Html(html)
}

/// `GET /line`: one message, plain text.
pub async fn line(meta: RequestMeta) -> String {
    let (kind, message) = generator::generate_message_with_kind();
    metrics::record_message(kind.as_str());

    tracing::info!(
        request_id = %meta.request_id,
        method = %meta.method,
        path = %meta.path,
        peer_addr = %meta.peer_display(),
        message = %message,
        "Served line"
    );
    with_newline(message)
}

/// `GET /insult`
pub async fn insult() -> String {
    metrics::record_message("insult");
    with_newline(generator::generate_insult())
}

/// `GET /comeback`
pub async fn comeback() -> String {
    metrics::record_message("comeback");
    with_newline(generator::generate_comeback())
}

/// `GET /exchange`: insult and comeback from one theme, as JSON.
pub async fn exchange(meta: RequestMeta) -> Json<Exchange> {
    let exchange = generator::generate_exchange();
    metrics::record_message("exchange");

    tracing::info!(
        request_id = %meta.request_id,
        method = %meta.method,
        path = %meta.path,
        peer_addr = %meta.peer_display(),
        insult = %exchange.insult,
        comeback = %exchange.comeback,
        "Served exchange"
    );
    Json(exchange)
}

/// `GET /health`
pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn not_found(meta: RequestMeta) -> impl IntoResponse {
    tracing::debug!(request_id = %meta.request_id, path = %meta.path, "No route matched");
    (StatusCode::NOT_FOUND, "Not Found")
}

fn with_newline(mut text: String) -> String {
    text.push('\n');
    text
}
