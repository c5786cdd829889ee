//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → limits.rs (reject oversized bodies)
//!     → handler
//!     → headers.rs (add security response headers)
//! ```

pub mod headers;
pub mod limits;
