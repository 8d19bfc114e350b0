//! In-memory store backend
//!
//! Same contract as Redis for the commands we use. It can be switched into
//! an "unavailable" state to exercise the fail-open paths, and it counts
//! mutating commands (attempted and applied) so callers can assert that
//! nothing was written.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use super::{InventoryStore, StoreError, StoreResult};

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: DashMap<String, String>,
    unavailable: AtomicBool,
    writes: AtomicU64,
    write_attempts: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent command fail with `Unavailable` (or recover).
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of successful SET / INCRBY commands so far
    pub fn writes(&self) -> u64 {
        self.writes.load(Ordering::SeqCst)
    }

    /// Number of SET / INCRBY commands issued, including ones rejected
    /// while unavailable
    pub fn write_attempts(&self) -> u64 {
        self.write_attempts.load(Ordering::SeqCst)
    }

    /// Store a raw string, bypassing the write counter
    pub fn insert_raw(&self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), value.into());
    }

    /// Direct read of the integer at `key`, bypassing availability
    pub fn peek(&self, key: &str) -> Option<i64> {
        self.values.get(key).and_then(|v| v.parse().ok())
    }

    fn check_available(&self) -> StoreResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store marked unavailable".into()));
        }
        Ok(())
    }

    fn parse(key: &str, raw: &str) -> StoreResult<i64> {
        raw.parse().map_err(|_| StoreError::InvalidValue {
            key: key.to_string(),
            value: raw.to_string(),
        })
    }
}

#[async_trait]
impl InventoryStore for MemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn get(&self, key: &str) -> StoreResult<Option<i64>> {
        self.check_available()?;
        match self.values.get(key) {
            Some(raw) => Self::parse(key, raw.value()).map(Some),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: i64) -> StoreResult<()> {
        self.write_attempts.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;
        self.values.insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn incr_by(&self, key: &str, delta: i64) -> StoreResult<i64> {
        self.write_attempts.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;
        // Entry guard holds the shard lock, so the read-add-write is atomic
        let mut entry = self.values.entry(key.to_string()).or_insert_with(|| "0".into());
        let next = Self::parse(key, entry.value())? + delta;
        *entry = next.to_string();
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(next)
    }

    async fn exists(&self, key: &str) -> StoreResult<bool> {
        self.check_available()?;
        Ok(self.values.contains_key(key))
    }

    async fn ping(&self) -> StoreResult<()> {
        self.check_available()
    }
}
