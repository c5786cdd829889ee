//! Startup orchestration.
//!
//! # Order
//! 1. Validate the corpus (fail fast before any socket is bound)
//! 2. Bind the HTTP and TCP listeners
//! 3. Serve until the stop signal, then drain within the grace period

use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::MonkeyConfig;
use crate::generator::{self, CorpusError};
use crate::http::{AppState, HttpServer};
use crate::lifecycle::shutdown::{drain_within, Shutdown};
use crate::lifecycle::signals::wait_for_signal;
use crate::net::listener::ListenerError;
use crate::net::LineServer;

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid message corpus: {0}")]
    Corpus(#[from] CorpusError),

    #[error("failed to bind HTTP listener on {address}: {source}")]
    HttpBind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to start TCP listener: {0}")]
    TcpBind(#[from] ListenerError),
}

/// Both servers, bound and ready to serve.
pub struct Services {
    http: HttpServer,
    http_listener: TcpListener,
    line: LineServer,
    grace: Duration,
}

impl Services {
    /// Validate the corpus and bind both listeners.
    pub async fn start(config: MonkeyConfig) -> Result<Self, StartupError> {
        let corpus = generator::init()?;
        tracing::info!(
            themes = corpus.themes().len(),
            templates = corpus.template_count(),
            "Message corpus validated"
        );

        let address = config.listener.http_bind_address.clone();
        let http_listener = TcpListener::bind(&address)
            .await
            .map_err(|source| StartupError::HttpBind { address, source })?;

        let line = LineServer::bind(
            &config.listener.tcp_bind_address,
            config.listener.max_connections,
            Duration::from_secs(config.timeouts.write_secs),
        )
        .await?;

        // The page advertises the bound port, which differs from the
        // configured one when binding to port 0.
        let state = match line.local_addr() {
            Ok(addr) => AppState::for_line_server(addr),
            Err(_) => AppState::from_config(&config),
        };

        let grace = Duration::from_secs(config.timeouts.shutdown_grace_secs);
        Ok(Self {
            http: HttpServer::with_state(config, state),
            http_listener,
            line,
            grace,
        })
    }

    pub fn http_addr(&self) -> std::io::Result<SocketAddr> {
        self.http_listener.local_addr()
    }

    pub fn tcp_addr(&self) -> std::io::Result<SocketAddr> {
        self.line.local_addr()
    }

    /// Serve until `stop` resolves or the HTTP server fails, then stop
    /// accepting and give in-flight work the grace period to finish.
    pub async fn serve_until<F>(self, stop: F)
    where
        F: Future<Output = ()>,
    {
        let shutdown = Shutdown::new();
        let tracker = self.line.tracker();

        let mut http_task = tokio::spawn(self.http.run(self.http_listener, shutdown.subscribe()));
        let tcp_task = tokio::spawn(self.line.run(shutdown.subscribe()));

        let mut http_done = false;
        tokio::select! {
            _ = stop => {}
            result = &mut http_task => {
                http_done = true;
                match result {
                    Ok(Ok(())) => tracing::warn!("HTTP server exited unexpectedly"),
                    Ok(Err(e)) => tracing::error!(error = %e, "HTTP server failed"),
                    Err(e) => tracing::error!(error = %e, "HTTP server task panicked"),
                }
            }
        }

        tracing::info!("Shutting down servers...");
        shutdown.trigger();

        drain_within(self.grace, async {
            if let Err(e) = tcp_task.await {
                tracing::error!(error = %e, "TCP server task panicked");
            }
            tracker.wait_idle().await;
            if !http_done {
                match http_task.await {
                    Ok(Ok(())) => {}
                    Ok(Err(e)) => tracing::error!(error = %e, "HTTP server shutdown error"),
                    Err(e) => tracing::error!(error = %e, "HTTP server task panicked"),
                }
            }
        })
        .await;

        tracing::info!("Server stopped.");
    }
}

/// Start both servers and run until SIGINT/SIGTERM.
pub async fn run(config: MonkeyConfig) -> Result<(), StartupError> {
    let services = Services::start(config).await?;

    tracing::info!("MonkeyLines Server Starting...");
    if let Ok(addr) = services.http_addr() {
        tracing::info!(url = %format!("http://localhost:{}", addr.port()), "HTTP");
    }
    if let Ok(addr) = services.tcp_addr() {
        tracing::info!(hint = %format!("telnet localhost {}", addr.port()), "TCP");
    }

    services.serve_until(wait_for_signal()).await;
    Ok(())
}
