//! Load config from the process environment (and `.env`, if present).

use crate::config::types::*;
use crate::error::ConfigError;
use std::str::FromStr;

pub const DB_HOST: &str = "DB_HOST";
pub const DB_PORT: &str = "DB_PORT";
pub const DB_USER: &str = "DB_USER";
pub const DB_PASSWORD: &str = "DB_PASSWORD";
pub const DB_DATABASE: &str = "DB_DATABASE";
pub const DB_MAX_CONNECTIONS: &str = "DB_MAX_CONNECTIONS";
pub const BIND_ADDR: &str = "BIND_ADDR";
pub const PORT: &str = "PORT";

impl Config {
    /// Read `.env` (when present) and then the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let db = DbConnection {
            host: required(DB_HOST)?,
            port: parse_or(get(DB_PORT), DB_PORT, DEFAULT_DB_PORT)?,
            user: required(DB_USER)?,
            password: required(DB_PASSWORD)?,
            database: required(DB_DATABASE)?,
            max_connections: parse_or(get(DB_MAX_CONNECTIONS), DB_MAX_CONNECTIONS, DEFAULT_MAX_CONNECTIONS)?,
        };
        let defaults = ServerConfig::default();
        let server = ServerConfig {
            bind_addr: parse_or(get(BIND_ADDR), BIND_ADDR, defaults.bind_addr)?,
            port: parse_or(get(PORT), PORT, defaults.port)?,
        };
        Ok(Config { db, server })
    }
}

fn parse_or<T: FromStr>(raw: Option<String>, key: &'static str, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
