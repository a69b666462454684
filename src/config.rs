//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Variables
//!
//! - `DATABASE_URL` - SQLite database location (default: `sqlite:shurl.db`;
//!   the file is created on first start)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `RESERVED_SLUGS` - Comma-separated extra reserved slugs, merged with
//!   the built-in routing segments
//! - `MAX_PROBE_ATTEMPTS` - Collision-probe ceiling for slug allocation
//!   (default: 32, min: 1)
//! - `DB_MAX_CONNECTIONS` - Connection pool size (default: 5)

use anyhow::Result;
use std::env;

use crate::utils::slug::DEFAULT_RESERVED_SLUGS;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Slugs that can never be registered or allocated: the HTTP surface's
    /// own path segments plus any `RESERVED_SLUGS` extras.
    pub reserved_slugs: Vec<String>,
    /// Collision-probe ceiling for slug allocation. Exhausting it fails the
    /// allocation with an internal error; with a bucket space of 10^9 this
    /// is unreachable in practice.
    pub max_probe_attempts: usize,
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`).
    pub db_max_connections: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:shurl.db".to_string());

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let mut reserved_slugs: Vec<String> = DEFAULT_RESERVED_SLUGS
            .iter()
            .map(|s| s.to_string())
            .collect();
        if let Ok(extra) = env::var("RESERVED_SLUGS") {
            reserved_slugs.extend(
                extra
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string),
            );
        }

        let max_probe_attempts = env::var("MAX_PROBE_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(32)
            .max(1);

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        Ok(Self {
            database_url,
            listen_addr,
            log_level,
            log_format,
            reserved_slugs,
            max_probe_attempts,
            db_max_connections,
        })
    }
}
