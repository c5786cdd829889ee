//! Live TCP session tracking.
//!
//! Every accepted line-protocol client opens a [`Session`]. The tracker keeps
//! the live count in a `watch` channel so shutdown can wait for it to reach
//! zero instead of polling.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::watch;

/// Identifier attached to every log line of one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(u64);

impl SessionId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tcp-{}", self.0)
    }
}

/// Shared handle counting open sessions. Clones observe the same count.
#[derive(Debug, Clone)]
pub struct ConnectionTracker {
    next_id: Arc<AtomicU64>,
    live: Arc<watch::Sender<usize>>,
}

impl ConnectionTracker {
    pub fn new() -> Self {
        let (live, _) = watch::channel(0);
        Self {
            next_id: Arc::new(AtomicU64::new(1)),
            live: Arc::new(live),
        }
    }

    /// Register a client from `peer`. The session counts as live until dropped.
    pub fn open(&self, peer: SocketAddr) -> Session {
        self.live.send_modify(|count| *count += 1);
        Session {
            id: SessionId(self.next_id.fetch_add(1, Ordering::Relaxed)),
            peer,
            opened: Instant::now(),
            live: Arc::clone(&self.live),
        }
    }

    /// Number of sessions currently open.
    pub fn live(&self) -> usize {
        *self.live.borrow()
    }

    /// Resolve once no session is open. Callers bound this with a timeout.
    pub async fn wait_idle(&self) {
        let mut rx = self.live.subscribe();
        // The sender lives in `self`, so the channel cannot close under us.
        let _ = rx.wait_for(|count| *count == 0).await;
    }
}

impl Default for ConnectionTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// One open client. Dropping it releases its slot in the live count.
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    peer: SocketAddr,
    opened: Instant,
    live: Arc<watch::Sender<usize>>,
}

impl Session {
    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn peer(&self) -> SocketAddr {
        self.peer
    }

    pub fn elapsed(&self) -> Duration {
        self.opened.elapsed()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.live.send_modify(|count| *count = count.saturating_sub(1));
        tracing::trace!(
            session = %self.id,
            peer_addr = %self.peer,
            elapsed_ms = self.opened.elapsed().as_millis() as u64,
            "TCP session closed"
        );
    }
}
