//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses parse and value ranges (timeouts > 0)
//! - Validate enumerated settings (log level, log format)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: MonkeyConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::MonkeyConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: &[&str] = &["pretty", "json"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field}: '{value}' is not a valid socket address")]
    InvalidAddress { field: &'static str, value: String },

    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },

    #[error("{field}: '{value}' is not one of {allowed:?}")]
    NotAllowed {
        field: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },

    #[error("listener.http_bind_address and listener.tcp_bind_address are both '{0}'")]
    SameAddress(String),
}

/// Check a configuration, collecting every problem found.
pub fn validate_config(config: &MonkeyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_address(&mut errors, "listener.http_bind_address", &config.listener.http_bind_address);
    check_address(&mut errors, "listener.tcp_bind_address", &config.listener.tcp_bind_address);
    if config.listener.http_bind_address == config.listener.tcp_bind_address
        && !config.listener.http_bind_address.ends_with(":0")
    {
        errors.push(ValidationError::SameAddress(config.listener.http_bind_address.clone()));
    }
    if config.listener.max_connections == 0 {
        errors.push(ValidationError::Zero { field: "listener.max_connections" });
    }

    for (field, value) in [
        ("timeouts.request_secs", config.timeouts.request_secs),
        ("timeouts.write_secs", config.timeouts.write_secs),
        ("timeouts.shutdown_grace_secs", config.timeouts.shutdown_grace_secs),
    ] {
        if value == 0 {
            errors.push(ValidationError::Zero { field });
        }
    }

    check_allowed(&mut errors, "observability.log_level", &config.observability.log_level, LOG_LEVELS);
    check_allowed(&mut errors, "observability.log_format", &config.observability.log_format, LOG_FORMATS);
    if config.observability.metrics_enabled {
        check_address(&mut errors, "observability.metrics_address", &config.observability.metrics_address);
    }

    if config.security.max_body_size == 0 {
        errors.push(ValidationError::Zero { field: "security.max_body_size" });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_address(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}

fn check_allowed(
    errors: &mut Vec<ValidationError>,
    field: &'static str,
    value: &str,
    allowed: &'static [&'static str],
) {
    if !allowed.contains(&value.to_ascii_lowercase().as_str()) {
        errors.push(ValidationError::NotAllowed {
            field,
            value: value.to_string(),
            allowed,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(validate_config(&MonkeyConfig::default()), Ok(()));
    }

    #[test]
    fn collects_all_errors() {
        let mut config = MonkeyConfig::default();
        config.listener.tcp_bind_address = "nowhere".into();
        config.timeouts.write_secs = 0;
        config.observability.log_level = "loud".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::Zero { field: "timeouts.write_secs" }));
        assert!(matches!(
            errors[0],
            ValidationError::InvalidAddress { field: "listener.tcp_bind_address", .. }
        ));
    }

    #[test]
    fn rejects_shared_address() {
        let mut config = MonkeyConfig::default();
        config.listener.tcp_bind_address = config.listener.http_bind_address.clone();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::SameAddress("0.0.0.0:8080".into())]);
    }

    #[test]
    fn ephemeral_ports_may_repeat() {
        let mut config = MonkeyConfig::default();
        config.listener.http_bind_address = "127.0.0.1:0".into();
        config.listener.tcp_bind_address = "127.0.0.1:0".into();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn metrics_address_checked_only_when_enabled() {
        let mut config = MonkeyConfig::default();
        config.observability.metrics_address = "bogus".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert!(validate_config(&config).is_err());
    }
}
