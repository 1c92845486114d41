//! Tax

use rust_decimal::{Decimal, RoundingStrategy};

use crate::{
    errors::PricingError,
    percentages::percent_of,
    validation::{ensure_price, ensure_tax_rate},
};

/// Number of decimal places tax amounts are rounded to.
pub const TAX_DECIMAL_PLACES: u32 = 2;

/// Calculates the tax owed on a single unit priced at `price`.
///
/// Exempt units owe exactly zero. Otherwise the tax is rounded to [`TAX_DECIMAL_PLACES`], with
/// midpoints rounded away from zero.
///
/// # Errors
///
/// Both checks run before the exemption is considered, in this order:
/// - [`PricingError::NegativePrice`]: `price` is below zero.
/// - [`PricingError::NegativeTaxRate`]: `tax_percent` is below zero.
///
/// Returns [`PricingError::Overflow`] if the tax cannot be represented.
pub fn calculate_tax(
    price: Decimal,
    tax_percent: Decimal,
    is_tax_exempt: bool,
) -> Result<Decimal, PricingError> {
    ensure_price(price)?;
    ensure_tax_rate(tax_percent)?;

    if is_tax_exempt {
        return Ok(Decimal::ZERO);
    }

    let tax = percent_of(price, tax_percent)?;

    Ok(tax.round_dp_with_strategy(TAX_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero))
}
