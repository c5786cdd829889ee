//! Request limits.
//!
//! Every route is a `GET`, so any sizeable body is rejected with
//! 413 Payload Too Large before a handler runs.

use tower_http::limit::RequestBodyLimitLayer;

use crate::config::SecurityConfig;

pub fn body_limit(config: &SecurityConfig) -> RequestBodyLimitLayer {
    RequestBodyLimitLayer::new(config.max_body_size)
}
