//! Price Calculator - time-of-day, bulk and surge pricing
//!
//! Arithmetic runs on `Decimal` so results like `10 * 0.85` come out as
//! `8.50` exactly; the response converts back to JSON numbers.
//!
//! Order of application against `total = base_price * quantity`:
//! 1. Off-peak window: 15% discount (rush multiplier skipped), else rush multiplier
//! 2. Bulk (quantity >= 5): further 10% off
//! 3. Surge (random): x1.2 on both total and reported multiplier
//! 4. Round to cents, halves away from zero

use std::sync::Arc;

use rust_decimal::prelude::*;
use thiserror::Error;

use crate::clock::Clock;
use crate::gateway::types::{CalculatePriceRequest, CalculatePriceResponse};
use crate::random::RandomSource;

pub const BULK_QUANTITY: i64 = 5;
pub const SURGE_PROBABILITY: f64 = 0.10;
pub const PRICE_OK_MESSAGE: &str = "Price calculated successfully";

fn rush_multiplier() -> Decimal {
    Decimal::new(11, 1)
}

fn off_peak_discount() -> Decimal {
    Decimal::new(15, 2)
}

fn bulk_discount() -> Decimal {
    Decimal::new(10, 2)
}

fn surge_multiplier() -> Decimal {
    Decimal::new(12, 1)
}

/// 07:00-09:00 and 12:00-13:00
pub fn is_rush_hour(hour: u32) -> bool {
    (7..9).contains(&hour) || (12..13).contains(&hour)
}

/// 14:00-16:00
pub fn is_off_peak(hour: u32) -> bool {
    (14..16).contains(&hour)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PriceError {
    #[error("Base price must be greater than 0")]
    NonPositiveBasePrice,

    #[error("Quantity must be greater than 0")]
    NonPositiveQuantity,

    /// Inputs too large for exact decimal arithmetic
    #[error("Price is out of range")]
    OutOfRange,
}

/// Result of the pricing rules, before conversion to the wire format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceQuote {
    pub total: Decimal,
    pub discount: Decimal,
    pub multiplier: Decimal,
}

pub struct PriceCalculator {
    random: Arc<dyn RandomSource>,
    clock: Arc<dyn Clock>,
}

impl PriceCalculator {
    pub fn new(random: Arc<dyn RandomSource>, clock: Arc<dyn Clock>) -> Self {
        Self { random, clock }
    }

    pub fn calculate(
        &self,
        req: &CalculatePriceRequest,
    ) -> Result<CalculatePriceResponse, PriceError> {
        if req.base_price.is_nan() || req.base_price <= 0.0 {
            return Err(PriceError::NonPositiveBasePrice);
        }
        if req.quantity <= 0 {
            return Err(PriceError::NonPositiveQuantity);
        }

        let base_price = Decimal::from_f64(req.base_price).ok_or(PriceError::OutOfRange)?;
        let hour = self.clock.hour();
        let surge = self.random.chance(SURGE_PROBABILITY);
        let quote = quote(base_price, req.quantity, hour, surge)?;

        tracing::debug!(
            item_id = %req.item_id,
            hour,
            surge,
            total = %quote.total,
            "Price calculated"
        );

        Ok(CalculatePriceResponse {
            total_price: to_f64(quote.total)?,
            base_price: req.base_price,
            quantity: req.quantity,
            discount: to_f64(quote.discount)?,
            price_multiplier: to_f64(quote.multiplier)?,
            message: PRICE_OK_MESSAGE.to_string(),
        })
    }
}

/// Apply the pricing rules for a fixed hour and surge decision.
pub fn quote(
    base_price: Decimal,
    quantity: i64,
    hour: u32,
    surge: bool,
) -> Result<PriceQuote, PriceError> {
    let mul = |a: Decimal, b: Decimal| a.checked_mul(b).ok_or(PriceError::OutOfRange);

    let mut total = mul(base_price, Decimal::from(quantity))?;
    let mut multiplier = if is_rush_hour(hour) {
        rush_multiplier()
    } else {
        Decimal::ONE
    };
    let mut discount = Decimal::ZERO;

    if is_off_peak(hour) {
        discount = off_peak_discount();
        total = mul(total, Decimal::ONE - discount)?;
    } else {
        total = mul(total, multiplier)?;
    }

    if quantity >= BULK_QUANTITY {
        total = mul(total, Decimal::ONE - bulk_discount())?;
        if discount.is_zero() {
            discount = bulk_discount();
        }
    }

    if surge {
        total = mul(total, surge_multiplier())?;
        multiplier = mul(multiplier, surge_multiplier())?;
    }

    Ok(PriceQuote {
        total: total.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        discount,
        multiplier,
    })
}

fn to_f64(value: Decimal) -> Result<f64, PriceError> {
    value.to_f64().ok_or(PriceError::OutOfRange)
}
