use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

static DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
static DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

/// Server configuration read from the environment
pub struct Config {
    /// Connection string from `DATABASE_URL`
    pub database_url: String,
    /// Pool size from `DATABASE_MAX_CONNECTIONS`
    pub database_max_connections: u32,
    /// Listener address from `BIND_ADDRESS`
    pub bind_address: SocketAddr,
}

impl Config {
    /// Builds the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from a variable lookup function
    ///
    /// # Returns
    /// - `Err(ConfigError::MissingEnvVar)`: `DATABASE_URL` is unset or empty
    /// - `Err(ConfigError::InvalidEnvValue)`: an optional variable is set but cannot be parsed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(value) => value
                .parse::<u32>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "DATABASE_MAX_CONNECTIONS".to_string(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_DATABASE_MAX_CONNECTIONS,
        };

        let bind_address = lookup("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: "BIND_ADDRESS".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url,
            database_max_connections,
            bind_address,
        })
    }
}
