//! Price arithmetic: validation, cents conversion and percentage discounts.
//!
//! Prices are 2-decimal [`Decimal`] values in the domain and integer cents in
//! storage. Discounted prices are rounded half away from zero.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{MAX_PRICE_CENTS, PRICE_SCALE};
use crate::error::{DomainError, DomainResult};

/// Validate a submitted price: positive, at most two decimal places, storable.
pub fn validate_price(price: Decimal) -> DomainResult<Decimal> {
    if price <= Decimal::ZERO {
        return Err(DomainError::validation("Price must be a positive number"));
    }
    if price.normalize().scale() > PRICE_SCALE {
        return Err(DomainError::validation(
            "Price must have at most 2 decimal places",
        ));
    }
    match price_to_cents(price) {
        Some(cents) if cents <= MAX_PRICE_CENTS => Ok(cents_to_price(cents)),
        _ => Err(DomainError::validation("Price is too large")),
    }
}

/// Convert a price to integer cents. `None` when it does not fit.
pub fn price_to_cents(price: Decimal) -> Option<i64> {
    price
        .round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero)
        .checked_mul(Decimal::ONE_HUNDRED)?
        .to_i64()
}

/// Convert stored cents back to a 2-decimal price.
pub fn cents_to_price(cents: i64) -> Decimal {
    Decimal::new(cents, PRICE_SCALE)
}

/// A percentage discount in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Discount(Decimal);

impl Discount {
    pub fn new(percent: Decimal) -> DomainResult<Self> {
        if percent < Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
            return Err(DomainError::validation(
                "Discount percent must be between 0 and 100",
            ));
        }
        Ok(Self(percent))
    }

    pub fn percent(&self) -> Decimal {
        self.0
    }

    /// `round(price * (1 - percent / 100), 2)`
    pub fn apply(&self, price: Decimal) -> Decimal {
        let remaining = Decimal::ONE_HUNDRED - self.0;
        (price * remaining / Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero)
    }
}
