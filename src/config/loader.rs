//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use crate::config::schema::MonkeyConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Overrides the port of `listener.http_bind_address`.
pub const HTTP_PORT_ENV: &str = "MONKEYLINES_HTTP_PORT";
/// Overrides the port of `listener.tcp_bind_address`.
pub const TCP_PORT_ENV: &str = "MONKEYLINES_TCP_PORT";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Env { key: &'static str, value: String },
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Env { key, value } => write!(f, "{} is not a valid port: '{}'", key, value),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Read a TOML file without validating it.
pub fn read_config(path: &Path) -> Result<MonkeyConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&content).map_err(ConfigError::Parse)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<MonkeyConfig, ConfigError> {
    let config = read_config(path)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Port overrides given on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PortOverrides {
    pub http: Option<u16>,
    pub tcp: Option<u16>,
}

impl PortOverrides {
    pub fn apply(&self, config: &mut MonkeyConfig) {
        if let Some(port) = self.http {
            config.listener.http_bind_address = with_port(&config.listener.http_bind_address, port);
        }
        if let Some(port) = self.tcp {
            config.listener.tcp_bind_address = with_port(&config.listener.tcp_bind_address, port);
        }
    }
}

/// Resolve the effective configuration for the server process.
///
/// Precedence, lowest first: defaults, the optional TOML file, the
/// `MONKEYLINES_*_PORT` environment variables, then command-line ports.
/// The result is validated.
pub fn resolve(path: Option<&Path>, cli: PortOverrides) -> Result<MonkeyConfig, ConfigError> {
    let mut config = match path {
        Some(path) => read_config(path)?,
        None => MonkeyConfig::default(),
    };
    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    cli.apply(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Apply port overrides looked up through `lookup`.
pub fn apply_env_overrides<F>(config: &mut MonkeyConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let overrides = PortOverrides {
        http: port_from(&lookup, HTTP_PORT_ENV)?,
        tcp: port_from(&lookup, TCP_PORT_ENV)?,
    };
    overrides.apply(config);
    Ok(())
}

fn port_from<F>(lookup: &F, key: &'static str) -> Result<Option<u16>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Env { key, value }),
    }
}

/// Replace the port component of a `host:port` address.
pub fn with_port(address: &str, port: u16) -> String {
    let host = address.rsplit_once(':').map(|(host, _)| host).unwrap_or(address);
    format!("{}:{}", host, port)
}
