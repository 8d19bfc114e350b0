//! Inventory Manager - check-and-decrement against the shared store
//!
//! State per item lives at `inventory:<itemId>`. The sequence for one check:
//!
//! ```text
//! GET ──┬─ value ─────────────┐
//!       ├─ absent ── SET 250 ─┤
//!       └─ unavailable ───────┼──▶ bypass (available, 999), no writes
//!                             ▼
//!              stock >= qty ? SET stock-qty ──▶ < 50 ? INCRBY 100..=200 (80%)
//! ```
//!
//! GET and SET are not wrapped in a transaction: two concurrent checks on
//! one item can read the same stock and both decrement (lost update), and
//! the counter may end up below zero. Accepted for this demo flow.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::gateway::types::{CheckInventoryRequest, CheckInventoryResponse};
use crate::random::RandomSource;
use crate::store::{InventoryStore, StoreError, inventory_key};

/// Seed stock range for startup initialization (inclusive)
pub const SEED_STOCK_MIN: i64 = 200;
pub const SEED_STOCK_MAX: i64 = 300;

/// Stock assigned to an item the first time it is checked
pub const DEFAULT_STOCK: i64 = 250;

/// Stock reported when the store cannot be reached
pub const BYPASS_STOCK: i64 = 999;

/// Post-decrement level below which replenishment may trigger
pub const LOW_STOCK_THRESHOLD: i64 = 50;
pub const REPLENISH_PROBABILITY: f64 = 0.8;
pub const REPLENISH_MIN: i64 = 100;
pub const REPLENISH_MAX: i64 = 200;

pub const AVAILABLE_MESSAGE: &str = "Inventory available";
pub const INSUFFICIENT_MESSAGE: &str = "Insufficient inventory";
pub const BYPASS_MESSAGE: &str = "Inventory check bypassed (Redis unavailable)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("Item ID is required")]
    MissingItemId,

    #[error("Quantity must be greater than 0")]
    NonPositiveQuantity,
}

pub struct InventoryManager {
    store: Arc<dyn InventoryStore>,
    random: Arc<dyn RandomSource>,
    seed_items: Vec<String>,
}

impl InventoryManager {
    pub fn new(
        store: Arc<dyn InventoryStore>,
        random: Arc<dyn RandomSource>,
        seed_items: Vec<String>,
    ) -> Self {
        Self {
            store,
            random,
            seed_items,
        }
    }

    /// Create counters for seed items that do not exist yet.
    ///
    /// Best effort: store errors are logged and skipped. Returns how many
    /// counters were created.
    pub async fn initialize(&self) -> usize {
        let mut created = 0;
        for item_id in &self.seed_items {
            let key = inventory_key(item_id);
            match self.store.exists(&key).await {
                Ok(true) => continue,
                Ok(false) => {}
                Err(e) => {
                    warn!(item_id = %item_id, error = %e, "Skipping inventory seed");
                    continue;
                }
            }

            let stock = self.random.between(SEED_STOCK_MIN, SEED_STOCK_MAX);
            match self.store.set(&key, stock).await {
                Ok(()) => {
                    debug!(item_id = %item_id, stock, "Seeded inventory");
                    created += 1;
                }
                Err(e) => warn!(item_id = %item_id, error = %e, "Failed to seed inventory"),
            }
        }

        info!(
            created,
            total = self.seed_items.len(),
            store = self.store.name(),
            "Inventory initialized"
        );
        created
    }

    pub async fn check(
        &self,
        req: &CheckInventoryRequest,
    ) -> Result<CheckInventoryResponse, InventoryError> {
        if req.item_id.is_empty() {
            return Err(InventoryError::MissingItemId);
        }
        if req.quantity <= 0 {
            return Err(InventoryError::NonPositiveQuantity);
        }

        let key = inventory_key(&req.item_id);
        let current_stock = match self.store.get(&key).await {
            Ok(Some(stock)) => stock,
            Ok(None) => {
                if let Err(e) = self.store.set(&key, DEFAULT_STOCK).await {
                    warn!(item_id = %req.item_id, error = %e, "Failed to initialize inventory");
                } else {
                    info!(item_id = %req.item_id, stock = DEFAULT_STOCK, "Initialized unseen item");
                }
                DEFAULT_STOCK
            }
            Err(StoreError::InvalidValue { value, .. }) => {
                warn!(item_id = %req.item_id, value = %value, "Non-numeric stock, treating as 0");
                0
            }
            Err(e @ StoreError::Unavailable(_)) => {
                warn!(item_id = %req.item_id, error = %e, "Inventory check bypassed");
                return Ok(CheckInventoryResponse {
                    available: true,
                    current_stock: BYPASS_STOCK,
                    requested_amount: req.quantity,
                    message: BYPASS_MESSAGE.to_string(),
                });
            }
        };

        let available = current_stock >= req.quantity;
        if available {
            self.decrement(&req.item_id, &key, current_stock - req.quantity)
                .await;
        }

        Ok(CheckInventoryResponse {
            available,
            current_stock,
            requested_amount: req.quantity,
            message: if available {
                AVAILABLE_MESSAGE
            } else {
                INSUFFICIENT_MESSAGE
            }
            .to_string(),
        })
    }

    /// Write the decremented stock, then maybe top it up.
    async fn decrement(&self, item_id: &str, key: &str, new_stock: i64) {
        if let Err(e) = self.store.set(key, new_stock).await {
            warn!(item_id = %item_id, error = %e, "Failed to write decremented stock");
        }

        if new_stock >= LOW_STOCK_THRESHOLD || !self.random.chance(REPLENISH_PROBABILITY) {
            return;
        }

        // INCRBY applies on top of the value just written; no re-read needed
        let amount = self.random.between(REPLENISH_MIN, REPLENISH_MAX);
        match self.store.incr_by(key, amount).await {
            Ok(stock) => info!(item_id = %item_id, amount, stock, "Replenished inventory"),
            Err(e) => warn!(item_id = %item_id, error = %e, "Replenishment failed"),
        }
    }
}
