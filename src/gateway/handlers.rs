//! HTTP handlers
//!
//! Thin adapters: decode the body, inject the demo delay, delegate to the
//! service, render the result.

pub mod health;
pub mod inventory;
pub mod order;
pub mod pricing;

pub use health::health_check;
pub use inventory::check_inventory;
pub use order::validate_order;
pub use pricing::calculate_price;
