use std::sync::Arc;

use crate::clock::Clock;
use crate::config::{AppConfig, LatencyConfig};
use crate::random::RandomSource;
use crate::store::InventoryStore;

use super::services::{InventoryManager, OrderValidator, PriceCalculator};

/// Gateway application state (shared across requests)
pub struct AppState {
    pub validator: OrderValidator,
    pub pricing: PriceCalculator,
    pub inventory: InventoryManager,
    /// Store handle, pinged once at startup
    pub store: Arc<dyn InventoryStore>,
    /// Source for the demo latencies
    pub random: Arc<dyn RandomSource>,
    pub latency: LatencyConfig,
}

impl AppState {
    pub fn new(
        config: &AppConfig,
        store: Arc<dyn InventoryStore>,
        random: Arc<dyn RandomSource>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            validator: OrderValidator::new(random.clone()),
            pricing: PriceCalculator::new(random.clone(), clock),
            inventory: InventoryManager::new(
                store.clone(),
                random.clone(),
                config.inventory.seed_items.clone(),
            ),
            store,
            random,
            latency: config.latency.clone(),
        }
    }
}
