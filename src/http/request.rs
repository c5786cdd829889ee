//! Per-request metadata for handler logging.
//!
//! # Responsibilities
//! - Read the request ID set by the request-id middleware
//! - Resolve the peer address when the server runs with connect info
//! - Capture method, path and `Host` header

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::{header, request::Parts, Method};

pub const X_REQUEST_ID: &str = "x-request-id";

/// Request facts worth logging alongside generated content.
#[derive(Debug, Clone)]
pub struct RequestMeta {
    pub method: Method,
    pub path: String,
    pub peer: Option<SocketAddr>,
    pub request_id: String,
    pub host: Option<String>,
}

impl RequestMeta {
    /// Peer address for logs, `"unknown"` when connect info is absent.
    pub fn peer_display(&self) -> String {
        self.peer
            .map(|addr| addr.to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

impl<S> FromRequestParts<S> for RequestMeta
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let request_id = parts
            .headers
            .get(X_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown")
            .to_string();
        let host = parts
            .headers
            .get(header::HOST)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);

        Ok(Self {
            method: parts.method.clone(),
            path: parts.uri.path().to_string(),
            peer,
            request_id,
            host,
        })
    }
}
