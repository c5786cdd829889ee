//! MonkeyLines: insults and comebacks over HTTP and raw TCP.

pub mod config;
pub mod generator;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod security;

pub use config::schema::MonkeyConfig;
pub use generator::{Exchange, Generator};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use net::LineServer;
