//! Runtime configuration read from the environment (after `.env` is loaded).

use crate::error::ConfigError;
use std::net::SocketAddr;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// `DATABASE_URL` value that selects the in-process store instead of PostgreSQL.
pub const MEMORY_DATABASE_URL: &str = "memory";

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    pub body_limit_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database_url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let bind_addr = parse_or("BIND_ADDR", get("BIND_ADDR"), DEFAULT_BIND_ADDR.parse().ok())?;
        let max_connections = parse_or(
            "DATABASE_MAX_CONNECTIONS",
            get("DATABASE_MAX_CONNECTIONS"),
            Some(DEFAULT_MAX_CONNECTIONS),
        )?;
        let body_limit_bytes = parse_or(
            "BODY_LIMIT_BYTES",
            get("BODY_LIMIT_BYTES"),
            Some(DEFAULT_BODY_LIMIT_BYTES),
        )?;

        Ok(Config {
            database_url,
            bind_addr,
            max_connections,
            body_limit_bytes,
        })
    }

    pub fn uses_memory_store(&self) -> bool {
        self.database_url == MEMORY_DATABASE_URL
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    raw: Option<String>,
    default: Option<T>,
) -> Result<T, ConfigError> {
    match raw {
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { name, value }),
        None => default.ok_or(ConfigError::Missing(name)),
    }
}
