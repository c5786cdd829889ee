//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming TCP connection (line port)
//!     → listener.rs (accept loop, connection limits)
//!     → connection.rs (session ids, live-session count)
//!     → line.rs (write one generated line, close)
//! ```
//!
//! The HTTP port is served by axum directly; see `crate::http`.
//!
//! # Design Decisions
//! - Bounded accept queue prevents resource exhaustion
//! - Each connection tracked as a session for graceful shutdown
//! - One task per connection; tasks share nothing but the read-only corpus

pub mod connection;
pub mod line;
pub mod listener;

pub use line::LineServer;
