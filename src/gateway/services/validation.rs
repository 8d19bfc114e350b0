//! Order Validator - field and range checks for an incoming order
//!
//! Pure apart from one random draw: after every rule passes, a small
//! fraction of requests is failed anyway to model a flaky dependency.

use std::sync::Arc;

use thiserror::Error;

use crate::gateway::types::{ValidateOrderRequest, ValidateOrderResponse};
use crate::random::RandomSource;

/// Largest quantity a single order may ask for
pub const MAX_ORDER_QUANTITY: i64 = 10;

/// Probability of the synthetic "temporarily unavailable" outcome
pub const SYNTHETIC_FAILURE_RATE: f64 = 0.02;

pub const VALIDATION_OK_MESSAGE: &str = "Order validation successful";

/// Reason an order was judged invalid, in check order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    #[error("Customer name is required")]
    MissingCustomerName,

    #[error("Item ID is required")]
    MissingItemId,

    #[error("Quantity must be greater than 0")]
    NonPositiveQuantity,

    #[error("Quantity cannot exceed 10 items")]
    QuantityTooLarge,

    /// Injected failure, not a rule violation
    #[error("Validation temporarily unavailable")]
    TemporarilyUnavailable,
}

pub struct OrderValidator {
    random: Arc<dyn RandomSource>,
}

impl OrderValidator {
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }

    /// Apply the rules in order; the first failure wins.
    pub fn check(&self, req: &ValidateOrderRequest) -> Result<(), ValidationFailure> {
        if req.customer_name.is_empty() {
            return Err(ValidationFailure::MissingCustomerName);
        }
        if req.item_id.is_empty() {
            return Err(ValidationFailure::MissingItemId);
        }
        if req.quantity <= 0 {
            return Err(ValidationFailure::NonPositiveQuantity);
        }
        if req.quantity > MAX_ORDER_QUANTITY {
            return Err(ValidationFailure::QuantityTooLarge);
        }
        if self.random.chance(SYNTHETIC_FAILURE_RATE) {
            return Err(ValidationFailure::TemporarilyUnavailable);
        }
        Ok(())
    }

    /// Business outcome as returned to the client (always HTTP 200)
    pub fn validate(&self, req: &ValidateOrderRequest) -> ValidateOrderResponse {
        match self.check(req) {
            Ok(()) => ValidateOrderResponse {
                valid: true,
                error: None,
                message: Some(VALIDATION_OK_MESSAGE.to_string()),
            },
            Err(failure) => {
                tracing::debug!(item_id = %req.item_id, reason = %failure, "Order rejected");
                ValidateOrderResponse {
                    valid: false,
                    error: Some(failure.to_string()),
                    message: None,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::FixedRandom;

    fn validator(random: FixedRandom) -> OrderValidator {
        OrderValidator::new(Arc::new(random))
    }

    fn order(item_id: &str, quantity: i64, customer_name: &str) -> ValidateOrderRequest {
        ValidateOrderRequest {
            item_id: item_id.to_string(),
            quantity,
            customer_name: customer_name.to_string(),
        }
    }

    #[test]
    fn test_valid_order() {
        let resp = validator(FixedRandom::never()).validate(&order("nebula-latte", 2, "Ada"));
        assert!(resp.valid);
        assert_eq!(resp.error, None);
        assert_eq!(resp.message.as_deref(), Some("Order validation successful"));
    }

    #[test]
    fn test_rule_messages() {
        let v = validator(FixedRandom::never());
        let cases = [
            (order("nebula-latte", 1, ""), "Customer name is required"),
            (order("", 1, "Ada"), "Item ID is required"),
            (order("nebula-latte", 0, "Ada"), "Quantity must be greater than 0"),
            (order("nebula-latte", -3, "Ada"), "Quantity must be greater than 0"),
            (order("nebula-latte", 11, "Ada"), "Quantity cannot exceed 10 items"),
        ];
        for (req, expected) in cases {
            let resp = v.validate(&req);
            assert!(!resp.valid, "{req:?}");
            assert_eq!(resp.error.as_deref(), Some(expected));
            assert_eq!(resp.message, None);
        }
    }

    #[test]
    fn test_first_failure_wins() {
        let v = validator(FixedRandom::never());
        assert_eq!(
            v.check(&order("", 0, "")),
            Err(ValidationFailure::MissingCustomerName)
        );
        assert_eq!(
            v.check(&order("", 50, "Ada")),
            Err(ValidationFailure::MissingItemId)
        );
    }

    #[test]
    fn test_quantity_bounds() {
        let v = validator(FixedRandom::never());
        assert!(v.check(&order("x", 1, "Ada")).is_ok());
        assert!(v.check(&order("x", MAX_ORDER_QUANTITY, "Ada")).is_ok());
    }

    #[test]
    fn test_synthetic_failure_only_after_rules_pass() {
        let v = validator(FixedRandom::always());
        let resp = v.validate(&order("nebula-latte", 2, "Ada"));
        assert!(!resp.valid);
        assert_eq!(
            resp.error.as_deref(),
            Some("Validation temporarily unavailable")
        );

        // A rule violation is still reported as itself
        assert_eq!(
            v.check(&order("nebula-latte", 20, "Ada")),
            Err(ValidationFailure::QuantityTooLarge)
        );
    }
}
