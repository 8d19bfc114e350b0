//! Redis store backend.
//!
//! The connection is established lazily on first use so the service can
//! start (and fail open) while Redis is down. Once connected, the
//! `ConnectionManager` reconnects on its own and is cheap to clone per call.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use redis::{AsyncCommands, Client, RedisResult, aio::ConnectionManager};
use tokio::sync::OnceCell;
use tracing::{debug, info};

use super::{InventoryStore, StoreError, StoreResult};

pub struct RedisStore {
    client: Client,
    conn: OnceCell<ConnectionManager>,
    url: String,
    timeout: Duration,
}

impl RedisStore {
    /// Create a Redis store handle.
    ///
    /// # Arguments
    /// * `url` - Redis connection URL (e.g., redis://localhost:6379)
    /// * `timeout` - bound for connecting and for each command
    pub fn new(url: &str, timeout: Duration) -> StoreResult<Self> {
        let client = Client::open(url).map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(Self {
            client,
            conn: OnceCell::new(),
            url: url.to_string(),
            timeout,
        })
    }

    async fn connection(&self) -> StoreResult<ConnectionManager> {
        let conn = self
            .conn
            .get_or_try_init(|| async {
                let manager =
                    tokio::time::timeout(self.timeout, ConnectionManager::new(self.client.clone()))
                        .await
                        .map_err(|_| {
                            StoreError::Unavailable(format!("connect to {} timed out", self.url))
                        })?
                        .map_err(|e| StoreError::Unavailable(e.to_string()))?;
                info!(url = %self.url, "Connected to Redis");
                Ok::<_, StoreError>(manager)
            })
            .await?;
        Ok(conn.clone())
    }

    /// Run one command against a fresh clone of the manager, bounded by the timeout
    async fn run<T, F, Fut>(&self, op: &'static str, f: F) -> StoreResult<T>
    where
        F: FnOnce(ConnectionManager) -> Fut,
        Fut: Future<Output = RedisResult<T>>,
    {
        let conn = self.connection().await?;
        match tokio::time::timeout(self.timeout, f(conn)).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                debug!(op, error = %e, "Redis command failed");
                Err(StoreError::Unavailable(e.to_string()))
            }
            Err(_) => Err(StoreError::Unavailable(format!(
                "{} timed out after {:?}",
                op, self.timeout
            ))),
        }
    }
}

#[async_trait]
impl InventoryStore for RedisStore {
    fn name(&self) -> &'static str {
        "redis"
    }

    async fn get(&self, key: &str) -> StoreResult<Option<i64>> {
        let raw: Option<String> = self
            .run("GET", |mut conn| async move { conn.get(key).await })
            .await?;

        match raw {
            Some(raw) => raw
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| StoreError::InvalidValue {
                    key: key.to_string(),
                    value: raw,
                }),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: i64) -> StoreResult<()> {
        self.run("SET", |mut conn| async move {
            let _: () = conn.set(key, value).await?;
            Ok(())
        })
        .await
    }

    async fn incr_by(&self, key: &str, delta: i64) -> StoreResult<i64> {
        self.run("INCRBY", |mut conn| async move { conn.incr(key, delta).await })
            .await
    }

    async fn exists(&self, key: &str) -> StoreResult<bool> {
        self.run("EXISTS", |mut conn| async move { conn.exists(key).await })
            .await
    }

    async fn ping(&self) -> StoreResult<()> {
        self.run("PING", |mut conn| async move {
            let _pong: String = redis::cmd("PING").query_async(&mut conn).await?;
            Ok(())
        })
        .await
    }
}
