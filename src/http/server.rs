//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, timeout, limits, security headers, metrics)
//! - Bind server to listener
//! - Graceful shutdown on the broadcast signal

use std::net::SocketAddr;
use std::time::{Duration, Instant};

use axum::{
    extract::{MatchedPath, Request},
    http::{header, HeaderValue},
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::MonkeyConfig;
use crate::http::{assets, handlers};
use crate::observability::metrics;
use crate::security;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Port of the TCP line server, advertised on the HTML page.
    pub tcp_port: u16,
}

impl AppState {
    /// State for a TCP server that has already bound `tcp_addr`.
    pub fn for_line_server(tcp_addr: SocketAddr) -> Self {
        Self {
            tcp_port: tcp_addr.port(),
        }
    }

    /// State derived from the configured bind address, before anything is bound.
    pub fn from_config(config: &MonkeyConfig) -> Self {
        let tcp_port = config
            .listener
            .tcp_bind_address
            .parse::<SocketAddr>()
            .map(|addr| addr.port())
            .unwrap_or(8023);
        Self { tcp_port }
    }
}

/// HTTP server for the MonkeyLines endpoints.
pub struct HttpServer {
    router: Router,
    config: MonkeyConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: MonkeyConfig) -> Self {
        let state = AppState::from_config(&config);
        Self::with_state(config, state)
    }

    /// Create a server whose handlers see `state`, e.g. the port the TCP
    /// server actually bound.
    pub fn with_state(config: MonkeyConfig, state: AppState) -> Self {
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &MonkeyConfig, state: AppState) -> Router {
        let images = get(assets::serve_image).layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static(assets::IMAGE_CACHE_CONTROL),
        ));

        let router = Router::new()
            .route("/", get(handlers::index))
            .route("/line", get(handlers::line))
            .route("/insult", get(handlers::insult))
            .route("/comeback", get(handlers::comeback))
            .route("/exchange", get(handlers::exchange))
            .route("/health", get(handlers::health))
            .route("/images/{file}", images)
            .route_layer(middleware::from_fn(tag_route))
            .fallback(handlers::not_found)
            .with_state(state)
            .layer(security::limits::body_limit(&config.security))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(middleware::from_fn(record_metrics))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid));

        security::headers::apply(router, &config.security)
    }

    /// The fully layered router, for in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("HTTP server draining");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &MonkeyConfig {
        &self.config
    }
}

/// Carry the matched route out on the response, where `record_metrics` sees it.
async fn tag_route(matched: MatchedPath, request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    response.extensions_mut().insert(matched);
    response
}

/// Outermost layer: counts every response, including timeouts and
/// rejected bodies that never reach a route.
async fn record_metrics(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let response = next.run(request).await;

    let route = response
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());
    metrics::record_http_request(route, response.status().as_u16(), start);
    response
}
