//! Security response headers.
//!
//! # Headers
//! - `X-Content-Type-Options: nosniff`
//! - `X-Frame-Options: DENY`
//! - `Referrer-Policy: no-referrer`
//! - `Content-Security-Policy: <security.content_security_policy>`
//!
//! A header a handler already set is left untouched.

use axum::http::{header, HeaderValue};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::SecurityConfig;

pub const DEFAULT_CSP: &str = "default-src 'self'; img-src 'self'; style-src 'self' 'unsafe-inline'";

/// Wrap `router` with the security header layers when enabled.
pub fn apply<S>(router: Router<S>, config: &SecurityConfig) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    if !config.enable_headers {
        return router;
    }

    let csp = match HeaderValue::from_str(&config.content_security_policy) {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(
                value = %config.content_security_policy,
                "Invalid Content-Security-Policy, using default"
            );
            HeaderValue::from_static(DEFAULT_CSP)
        }
    };

    router
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CONTENT_SECURITY_POLICY,
            csp,
        ))
}
