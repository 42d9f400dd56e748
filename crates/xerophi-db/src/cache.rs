//! Redis connection management for the cache/session store.

use redis::aio::MultiplexedConnection;
use redis::{ConnectionAddr, ConnectionInfo, RedisConnectionInfo};
use tracing::info;

use crate::error::DbError;

/// Configuration for connecting to Redis.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub host: String,
    pub port: u16,
    /// Optional `AUTH` password.
    pub password: Option<String>,
    /// Logical database index selected on connect.
    pub db: i64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 6379,
            password: None,
            db: 0,
        }
    }
}

impl CacheConfig {
    fn connection_info(&self) -> ConnectionInfo {
        ConnectionInfo {
            addr: ConnectionAddr::Tcp(self.host.clone(), self.port),
            redis: RedisConnectionInfo {
                db: self.db,
                password: self.password.clone(),
                ..Default::default()
            },
        }
    }
}

/// Long-lived handle to the key-value store.
pub struct CacheManager {
    conn: MultiplexedConnection,
}

impl CacheManager {
    /// Open a connection and validate it with `PING`.
    pub async fn connect(config: &CacheConfig) -> Result<Self, DbError> {
        info!(
            host = %config.host,
            port = config.port,
            db = config.db,
            "Connecting to Redis"
        );

        let client = redis::Client::open(config.connection_info())?;
        let mut conn = client.get_multiplexed_async_connection().await?;

        let pong: String = redis::cmd("PING").query_async(&mut conn).await?;
        if pong != "PONG" {
            return Err(DbError::Query(format!("unexpected PING reply: {pong}")));
        }

        info!("Successfully connected to Redis");

        Ok(Self { conn })
    }

    /// Ask the server to close the connection.
    pub async fn close(mut self) -> Result<(), DbError> {
        let _: () = redis::cmd("QUIT").query_async(&mut self.conn).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_info_carries_db_and_password() {
        let config = CacheConfig {
            host: "cache.internal".into(),
            port: 6380,
            password: Some("s3cret".into()),
            db: 4,
        };
        let info = config.connection_info();

        match info.addr {
            ConnectionAddr::Tcp(host, port) => {
                assert_eq!(host, "cache.internal");
                assert_eq!(port, 6380);
            }
            other => panic!("unexpected address: {other:?}"),
        }
        assert_eq!(info.redis.db, 4);
        assert_eq!(info.redis.password.as_deref(), Some("s3cret"));
    }

    #[test]
    fn default_targets_local_db_zero() {
        let info = CacheConfig::default().connection_info();
        assert_eq!(info.redis.db, 0);
        assert!(info.redis.password.is_none());
    }
}
