//! Line-per-connection TCP server.
//!
//! # Protocol
//! ```text
//! client connects
//!     → server writes one generated message + "\n"
//!     → server shuts down its write half and closes
//! ```
//! No input is read. A write that fails or exceeds `timeouts.write_secs`
//! is logged and the connection dropped.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::broadcast;

use crate::generator;
use crate::net::connection::{ConnectionTracker, Session};
use crate::net::listener::{ConnectionPermit, Listener, ListenerError};
use crate::observability::metrics;

/// TCP server that hands each client a single line.
pub struct LineServer {
    listener: Listener,
    tracker: ConnectionTracker,
    write_timeout: Duration,
}

impl LineServer {
    /// Bind to `address`, allowing at most `max_connections` clients at once.
    pub async fn bind(
        address: &str,
        max_connections: usize,
        write_timeout: Duration,
    ) -> Result<Self, ListenerError> {
        let listener = Listener::bind(address, max_connections).await?;
        Ok(Self::new(listener, write_timeout))
    }

    pub fn new(listener: Listener, write_timeout: Duration) -> Self {
        Self {
            listener,
            tracker: ConnectionTracker::new(),
            write_timeout,
        }
    }

    pub fn local_addr(&self) -> Result<SocketAddr, std::io::Error> {
        self.listener.local_addr()
    }

    /// Handle to the live-connection count, for draining on shutdown.
    pub fn tracker(&self) -> ConnectionTracker {
        self.tracker.clone()
    }

    /// Accept clients until `shutdown` fires. In-flight clients keep running;
    /// wait on [`LineServer::tracker`] to drain them.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        tracing::info!(
            address = ?self.listener.local_addr().ok(),
            "TCP line server starting"
        );

        loop {
            tokio::select! {
                _ = shutdown.recv() => break,
                accepted = self.listener.accept() => match accepted {
                    Ok((stream, peer, permit)) => {
                        let session = self.tracker.open(peer);
                        tokio::spawn(handle_connection(stream, session, permit, self.write_timeout));
                    }
                    Err(ListenerError::Closed) => break,
                    Err(e) => {
                        tracing::warn!(error = %e, "TCP accept failed");
                        // Errors like EMFILE repeat immediately; avoid spinning.
                        tokio::time::sleep(Duration::from_millis(100)).await;
                    }
                },
            }
        }

        tracing::info!(
            live_sessions = self.tracker.live(),
            "TCP line server stopped accepting"
        );
    }
}

async fn handle_connection(
    mut stream: TcpStream,
    session: Session,
    _permit: ConnectionPermit,
    write_timeout: Duration,
) {
    let peer = session.peer();
    metrics::tcp_connection_opened();
    tracing::info!(session = %session.id(), peer_addr = %peer, "TCP connection");

    let (kind, message) = generator::generate_message_with_kind();
    metrics::record_message(kind.as_str());

    let outcome = match tokio::time::timeout(write_timeout, write_line(&mut stream, &message)).await {
        Ok(Ok(())) => {
            tracing::info!(session = %session.id(), peer_addr = %peer, message = %message, elapsed_ms = session.elapsed().as_millis() as u64, "Sent line");
            "sent"
        }
        Ok(Err(e)) => {
            tracing::warn!(session = %session.id(), peer_addr = %peer, error = %e, "TCP write failed");
            "error"
        }
        Err(_) => {
            tracing::warn!(
                session = %session.id(),
                peer_addr = %peer,
                timeout_secs = write_timeout.as_secs(),
                "TCP write timed out"
            );
            "timeout"
        }
    };

    metrics::tcp_connection_closed(outcome);
}

/// Write `message` followed by a newline, flush, and close the write half.
pub async fn write_line<W>(writer: &mut W, message: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut line = String::with_capacity(message.len() + 1);
    line.push_str(message);
    line.push('\n');

    writer.write_all(line.as_bytes()).await?;
    writer.flush().await?;
    writer.shutdown().await
}
