//! Runtime configuration read from environment variables.

use crate::task::adapters::generation::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A variable holds a value that cannot be parsed.
    #[error("invalid value for {name}: {reason}")]
    InvalidValue {
        /// Variable name.
        name: &'static str,
        /// Parser message.
        reason: String,
    },
}

/// Deployment mode controlling how much error detail reaches clients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RuntimeMode {
    /// Internal error messages are returned verbatim.
    #[default]
    Development,
    /// Internal error messages are replaced with a generic one.
    Production,
}

impl RuntimeMode {
    /// Maps an `APP_ENV` value onto a mode. Anything but `production` is
    /// development.
    #[must_use]
    pub fn from_app_env(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("production") {
            Self::Production
        } else {
            Self::Development
        }
    }

    /// Returns whether internal details must be hidden.
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Gemini provider settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    /// API key.
    pub api_key: String,
    /// Model identifier.
    pub model: String,
    /// Endpoint base URL.
    pub base_url: String,
}

/// Service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Deployment mode.
    pub mode: RuntimeMode,
    /// Provider settings; `None` selects the stub generator.
    pub gemini: Option<GeminiConfig>,
    /// Bound on a single generation call.
    pub generation_timeout: Duration,
    /// Simulated latency of the stub generator.
    pub stub_latency: Duration,
    /// Postgres connection string, used with the `postgres` feature.
    pub database_url: Option<String>,
}

impl AppConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for unparsable numeric values.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through `lookup`, which returns a variable's
    /// value or `None` when unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for unparsable numeric values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let gemini = read("GEMINI_API_KEY").map(|api_key| GeminiConfig {
            api_key,
            model: read("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_owned()),
            base_url: read("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_owned()),
        });

        Ok(Self {
            host: read("HOST").unwrap_or_else(|| "127.0.0.1".to_owned()),
            port: parse_or("PORT", read("PORT"), 3000)?,
            mode: read("APP_ENV")
                .as_deref()
                .map_or(RuntimeMode::Development, RuntimeMode::from_app_env),
            gemini,
            generation_timeout: Duration::from_secs(parse_or(
                "GENERATION_TIMEOUT_SECS",
                read("GENERATION_TIMEOUT_SECS"),
                30,
            )?),
            stub_latency: Duration::from_millis(parse_or(
                "STUB_GENERATOR_LATENCY_MS",
                read("STUB_GENERATOR_LATENCY_MS"),
                0,
            )?),
            database_url: read("DATABASE_URL"),
        })
    }

    /// Returns the `host:port` bind address.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T>(name: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.map_or(Ok(default), |value| {
        value
            .trim()
            .parse()
            .map_err(|err: T::Err| ConfigError::InvalidValue {
                name,
                reason: err.to_string(),
            })
    })
}
