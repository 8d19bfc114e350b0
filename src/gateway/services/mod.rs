//! Gateway Services Layer
//!
//! Business logic for the three endpoints, kept out of the HTTP handlers.
//! Each service receives its collaborators (store, random source, clock)
//! through its constructor.

pub mod inventory;
pub mod pricing;
pub mod validation;

pub use inventory::{InventoryError, InventoryManager};
pub use pricing::{PriceCalculator, PriceError, PriceQuote};
pub use validation::{OrderValidator, ValidationFailure};
