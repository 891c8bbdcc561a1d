//! API configuration module.
//!
//! Configuration is layered with the `config` crate:
//!
//! ```text
//! built-in defaults  ──►  haven.toml (optional)  ──►  HAVEN_* environment
//!      lowest                                            highest
//! ```
//!
//! | Key             | Env var               | Default   |
//! |-----------------|-----------------------|-----------|
//! | `port`          | `HAVEN_PORT`          | `3000`    |
//! | `bind_addr`     | `HAVEN_BIND_ADDR`     | `0.0.0.0` |
//! | `notifier`      | `HAVEN_NOTIFIER`      | `log`     |
//! | `log_level`     | `HAVEN_LOG_LEVEL`     | `info`    |
//! | `property_name` | `HAVEN_PROPERTY_NAME` | `Haven`   |

use std::net::SocketAddr;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};

/// Base name of the optional config file (`haven.toml`).
pub const CONFIG_FILE: &str = "haven";

/// Prefix of the environment overrides.
pub const ENV_PREFIX: &str = "HAVEN";

/// Which notifier implementation to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifierKind {
    /// Render the confirmation and write it to the log.
    Log,
    /// Send nothing.
    Disabled,
}

impl NotifierKind {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "log" => Some(NotifierKind::Log),
            "disabled" | "none" | "off" => Some(NotifierKind::Disabled),
            _ => None,
        }
    }
}

/// API server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// HTTP listen port
    pub port: u16,

    /// Interface to bind
    pub bind_addr: String,

    /// `log` or `disabled`
    pub notifier: String,

    /// Default tracing filter when `HAVEN_LOG` is not set
    pub log_level: String,

    /// Property name used in guest confirmations
    pub property_name: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            port: 3000,
            bind_addr: "0.0.0.0".to_string(),
            notifier: "log".to_string(),
            log_level: "info".to_string(),
            property_name: "Haven".to_string(),
        }
    }
}

impl ApiConfig {
    /// Loads defaults, then `haven.toml` if present, then `HAVEN_*` variables.
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Self::with_defaults()?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        Self::from_settings(settings)
    }

    /// A builder pre-loaded with the default values.
    pub fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let defaults = ApiConfig::default();
        let builder = Config::builder()
            .set_default("port", i64::from(defaults.port))?
            .set_default("bind_addr", defaults.bind_addr)?
            .set_default("notifier", defaults.notifier)?
            .set_default("log_level", defaults.log_level)?
            .set_default("property_name", defaults.property_name)?;
        Ok(builder)
    }

    /// Deserializes and validates a built configuration.
    pub fn from_settings(settings: Config) -> Result<Self, ConfigError> {
        let config: ApiConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values the type system cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidValue("port".to_string()));
        }
        self.notifier_kind()?;
        self.socket_addr()?;
        Ok(())
    }

    pub fn notifier_kind(&self) -> Result<NotifierKind, ConfigError> {
        NotifierKind::parse(&self.notifier)
            .ok_or_else(|| ConfigError::UnknownNotifier(self.notifier.clone()))
    }

    /// Address the listener binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.bind_addr, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidValue("bind_addr".to_string()))
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Unknown notifier '{0}' (expected 'log' or 'disabled')")]
    UnknownNotifier(String),
}
