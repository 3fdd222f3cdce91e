//! Server configuration module
//!
//! Handles loading configuration from environment variables. The database
//! connection string and token signing secret are required; startup fails
//! without them.

use std::net::SocketAddr;

use thiserror::Error;

/// Configuration loading error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is missing or empty
    #[error("required environment variable {0} is missing or empty")]
    MissingVar(&'static str),
}

/// Server configuration loaded from environment variables
#[derive(Clone)]
pub struct Config {
    /// PostgreSQL connection string (DATABASE_URL, required)
    pub database_url: String,
    /// HMAC secret for signing session tokens (TOKEN_SECRET, required)
    pub token_secret: String,
    /// Server port (default: 3000)
    pub port: u16,
    /// Server host (default: 127.0.0.1)
    pub host: [u8; 4],
    /// Database connection pool maximum connections (default: 20)
    pub database_max_connections: u32,
    /// Database connection pool minimum connections (default: 2)
    pub database_min_connections: u32,
}

// No Debug derive: the struct holds the signing secret and database
// credentials, which must not end up in log output.

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = require_var("DATABASE_URL")?;
        let token_secret = require_var("TOKEN_SECRET")?;

        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        let host = std::env::var("HOST")
            .ok()
            .map(|h| {
                if h == "0.0.0.0" {
                    [0, 0, 0, 0]
                } else {
                    if h != "127.0.0.1" {
                        tracing::warn!(host = %h, "Unsupported HOST value, binding to 127.0.0.1");
                    }
                    [127, 0, 0, 1]
                }
            })
            .unwrap_or([127, 0, 0, 1]);

        let database_max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(20);

        let database_min_connections = std::env::var("DATABASE_MIN_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(2);

        Ok(Self {
            database_url,
            token_secret,
            port,
            host,
            database_max_connections,
            database_min_connections,
        })
    }

    /// Get socket address from config
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment variables are process-global, so everything runs in a
    // single test to avoid interference between parallel test threads.
    #[test]
    fn test_from_env_requires_database_url_and_secret() {
        std::env::remove_var("DATABASE_URL");
        std::env::remove_var("TOKEN_SECRET");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::MissingVar("DATABASE_URL"))
        ));

        std::env::set_var("DATABASE_URL", "postgres://localhost/campus");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::MissingVar("TOKEN_SECRET"))
        ));

        // Whitespace-only values count as missing
        std::env::set_var("TOKEN_SECRET", "   ");
        assert!(Config::from_env().is_err());

        std::env::set_var("TOKEN_SECRET", "test-secret");
        let config = Config::from_env().unwrap();
        assert_eq!(config.database_url, "postgres://localhost/campus");
        assert_eq!(config.token_secret, "test-secret");
        assert_eq!(config.port, 3000);
        assert_eq!(config.host, [127, 0, 0, 1]);
        assert_eq!(config.socket_addr().port(), 3000);

        std::env::set_var("HOST", "0.0.0.0");
        assert_eq!(Config::from_env().unwrap().host, [0, 0, 0, 0]);

        // Anything other than the two supported values falls back to loopback
        std::env::set_var("HOST", "192.168.1.5");
        assert_eq!(Config::from_env().unwrap().host, [127, 0, 0, 1]);

        std::env::remove_var("HOST");
        std::env::remove_var("DATABASE_URL");
        std::env::remove_var("TOKEN_SECRET");
    }
}
