//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → loader.rs (MONKEYLINES_HTTP_PORT / MONKEYLINES_TCP_PORT, then --http-port / --tcp-port)
//!     → validation.rs (semantic checks)
//!     → MonkeyConfig (validated, immutable)
//!     → shared by value with each subsystem
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no hot reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, resolve, ConfigError, PortOverrides};
pub use schema::MonkeyConfig;
pub use schema::{ListenerConfig, ObservabilityConfig, SecurityConfig, TimeoutConfig};
