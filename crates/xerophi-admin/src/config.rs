//! JSON configuration file.
//!
//! Every section is required. A missing or malformed file is reported
//! to the caller; nothing falls back to defaults.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use xerophi_db::{CacheConfig, DbConfig};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub surreal: SurrealSettings,
    pub redis: RedisSettings,
    pub sentry: SentrySettings,
    pub server: ServerSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SurrealSettings {
    pub connection: SurrealConnection,
    /// Target database name.
    pub db: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SurrealConnection {
    pub url: String,
    pub namespace: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RedisSettings {
    pub connection: RedisConnection,
    /// Target database index.
    pub db: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RedisConnection {
    pub host: String,
    pub port: u16,
    pub password: Option<String>,
}

/// Error-reporting endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SentrySettings {
    pub dsn: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub port: u16,
}

impl Config {
    pub fn db_config(&self) -> DbConfig {
        let conn = &self.surreal.connection;
        DbConfig {
            url: conn.url.clone(),
            namespace: conn.namespace.clone(),
            database: self.surreal.db.clone(),
            username: conn.username.clone(),
            password: conn.password.clone(),
        }
    }

    pub fn cache_config(&self) -> CacheConfig {
        let conn = &self.redis.connection;
        CacheConfig {
            host: conn.host.clone(),
            port: conn.port,
            password: conn.password.clone(),
            db: self.redis.db,
        }
    }
}

/// Load and parse the configuration file at `path`.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
