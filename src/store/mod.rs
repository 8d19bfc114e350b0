//! Shared key-value store holding inventory counters
//!
//! Backends:
//! - [`RedisStore`]: production backend over a Redis connection manager
//! - [`MemoryStore`]: in-process map for local runs and tests
//!
//! "Key absent" is `Ok(None)`; anything that prevents an answer is
//! [`StoreError::Unavailable`]. Callers route the two differently.

mod memory;
mod redis_store;

pub use memory::MemoryStore;
pub use redis_store::RedisStore;

use async_trait::async_trait;
use thiserror::Error;

/// Namespace for per-item inventory counters
pub const INVENTORY_KEY_PREFIX: &str = "inventory";

pub fn inventory_key(item_id: &str) -> String {
    format!("{}:{}", INVENTORY_KEY_PREFIX, item_id)
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Value at {key} is not an integer: {value}")]
    InvalidValue { key: String, value: String },
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// Backend name for logs
    fn name(&self) -> &'static str;

    async fn get(&self, key: &str) -> StoreResult<Option<i64>>;

    async fn set(&self, key: &str, value: i64) -> StoreResult<()>;

    /// Atomic add; returns the value after the increment.
    async fn incr_by(&self, key: &str, delta: i64) -> StoreResult<i64>;

    async fn exists(&self, key: &str) -> StoreResult<bool>;

    async fn ping(&self) -> StoreResult<()>;
}
