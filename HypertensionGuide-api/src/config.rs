//! Runtime configuration read from the process environment (after `.env` is loaded)

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

/// Errors raised while reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid PORT value '{value}': {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Invalid HOST value '{0}'")]
    InvalidHost(String),
}

/// Server settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Reported by the health endpoint
    pub environment: String,
    /// Attach a permissive CORS layer
    pub cors_allow_any: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 3000,
            environment: "development".to_string(),
            cors_allow_any: true,
        }
    }
}

impl ApiConfig {
    /// Read HOST, PORT, APP_ENV and CORS_ALLOW_ANY from the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = match lookup("HOST") {
            Some(value) => value
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidHost(value.clone()))?,
            None => defaults.host,
        };

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value: value.clone(), source })?,
            None => defaults.port,
        };

        let environment = lookup("APP_ENV").unwrap_or(defaults.environment);

        let cors_allow_any = lookup("CORS_ALLOW_ANY")
            .map(|v| v.to_lowercase() == "true" || v == "1")
            .unwrap_or(defaults.cors_allow_any);

        Ok(Self { host, port, environment, cors_allow_any })
    }

    /// Address the listener binds to
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
