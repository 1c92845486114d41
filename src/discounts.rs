//! Discounts

use rust_decimal::Decimal;

use crate::{
    errors::PricingError,
    percentages::fraction,
    validation::{ensure_discount, ensure_price},
};

/// Reduces `price` by `discount_percent` percent.
///
/// The result is not rounded.
///
/// # Errors
///
/// Checked in this order:
/// - [`PricingError::NegativePrice`]: `price` is below zero.
/// - [`PricingError::NegativeDiscount`]: `discount_percent` is below zero.
/// - [`PricingError::DiscountAboveMaximum`]: `discount_percent` is above 100.
/// - [`PricingError::Overflow`]: the discounted price cannot be represented.
pub fn apply_discount(price: Decimal, discount_percent: Decimal) -> Result<Decimal, PricingError> {
    ensure_price(price)?;
    ensure_discount(discount_percent)?;

    let multiplier = Decimal::ONE - fraction(discount_percent)?;

    price.checked_mul(multiplier).ok_or(PricingError::Overflow)
}
