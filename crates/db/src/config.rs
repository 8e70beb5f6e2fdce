//! # Store Configuration
//!
//! Configuration for the slot store, read from environment variables:
//!
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `DB_MAX_CONNECTIONS`: Pool size (default: 5)
//! - `LOG_LEVEL`: Logging level (default: "info")

use eyre::{Result, WrapErr};
use std::env;
use tracing::Level;

/// Connection and logging settings shared by the slotbook binaries.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// PostgreSQL database connection string
    pub database_url: String,

    /// Maximum number of pooled connections
    pub max_connections: u32,

    /// Log level for the application
    pub log_level: Level,
}

impl StoreConfig {
    /// Creates a new StoreConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The DATABASE_URL environment variable is not set
    /// - The DB_MAX_CONNECTIONS value cannot be parsed as a u32
    pub fn from_env() -> Result<Self> {
        let database_url = env::var("DATABASE_URL")
            .wrap_err("DATABASE_URL environment variable must be set")?;

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .wrap_err("Invalid DB_MAX_CONNECTIONS value")?;

        let log_level =
            parse_log_level(&env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()));

        Ok(Self {
            database_url,
            max_connections,
            log_level,
        })
    }
}

/// Maps a level name to a tracing level, falling back to INFO.
pub fn parse_log_level(value: &str) -> Level {
    match value.to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
