//! Order Middleware - demo order-processing endpoints
//!
//! Validation, dynamic pricing and inventory checks behind an axum router,
//! with inventory counters kept in a shared Redis store.
//!
//! # Modules
//!
//! - [`config`] - YAML config with environment overrides
//! - [`logging`] - tracing subscriber setup
//! - [`random`] - injectable random decisions
//! - [`clock`] - wall-clock hour for time-of-day pricing
//! - [`store`] - inventory store trait with Redis and in-memory backends
//! - [`gateway`] - HTTP router, handlers and business services

pub mod clock;
pub mod config;
pub mod gateway;
pub mod logging;
pub mod random;
pub mod store;

// Convenient re-exports at crate root
pub use clock::{Clock, FixedClock, LocalClock};
pub use config::AppConfig;
pub use gateway::services::{InventoryManager, OrderValidator, PriceCalculator};
pub use gateway::state::AppState;
pub use random::{FixedRandom, RandomSource, SeededRandom, ThreadRandom};
pub use store::{InventoryStore, MemoryStore, RedisStore, StoreError};
