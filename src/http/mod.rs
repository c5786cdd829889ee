//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection (HTTP port)
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, peer, host for logging)
//!     → handlers.rs (one generator call per route)
//!     → page.rs (HTML) / assets.rs (embedded images)
//!     → security headers → client
//! ```
//!
//! # Routes
//! - `GET /`: HTML page with one message
//! - `GET /line`, `/insult`, `/comeback`: plain text
//! - `GET /exchange`: JSON insult/comeback pair
//! - `GET /images/{file}`: embedded images, cached for a week
//! - `GET /health`: liveness

pub mod assets;
pub mod handlers;
pub mod page;
pub mod request;
pub mod server;

pub use request::{RequestMeta, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
