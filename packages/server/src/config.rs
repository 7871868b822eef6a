//! Runtime server configuration
//!
//! `ServerConfig` is read once from the environment at startup and is
//! immutable afterwards.
//!
//! # Environment Variables
//!
//! - `TRIVIA_HOST`: Bind address (default: 127.0.0.1)
//! - `TRIVIA_PORT`: Server port (default: 5000)
//! - `TRIVIA_DATABASE_PATH`: Database file (default: ~/.trivia/database/trivia.db)
//! - `CORS_ALLOW_ORIGIN`: Single allowed origin (default: any origin)
//! - `TRIVIA_SEED_CATEGORIES`: Seed the default categories into an empty store (default: true)

use axum::http::HeaderValue;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("Failed to get home directory; set TRIVIA_DATABASE_PATH")]
    NoHomeDirectory,
}

impl ConfigError {
    fn invalid(key: &'static str, value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            key,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Resolved server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    /// `None` allows any origin
    pub cors_allow_origin: Option<HeaderValue>,
    pub seed_categories: bool,
}

impl ServerConfig {
    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("TRIVIA_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("TRIVIA_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::invalid("TRIVIA_PORT", &raw, e.to_string()))?,
            None => DEFAULT_PORT,
        };

        let database_path = match lookup("TRIVIA_DATABASE_PATH") {
            Some(path) => PathBuf::from(path),
            None => default_database_path()?,
        };

        let cors_allow_origin = match lookup("CORS_ALLOW_ORIGIN") {
            Some(origin) => Some(origin.parse::<HeaderValue>().map_err(|_| {
                ConfigError::invalid("CORS_ALLOW_ORIGIN", &origin, "must be a valid HTTP origin")
            })?),
            None => None,
        };

        let seed_categories = match lookup("TRIVIA_SEED_CATEGORIES") {
            Some(raw) => parse_bool("TRIVIA_SEED_CATEGORIES", &raw)?,
            None => true,
        };

        Ok(Self {
            host,
            port,
            database_path,
            cors_allow_origin,
            seed_categories,
        })
    }

    /// `host:port` for the TCP listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// ~/.trivia/database/trivia.db
fn default_database_path() -> Result<PathBuf, ConfigError> {
    let home_dir = dirs::home_dir().ok_or(ConfigError::NoHomeDirectory)?;
    Ok(home_dir.join(".trivia").join("database").join("trivia.db"))
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::invalid(key, raw, "expected true or false")),
    }
}
