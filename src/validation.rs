//! Validation
//!
//! Input checks shared by the pricing functions. Each check logs the rule it rejected at `debug`
//! level before handing the error back to the caller.

use rust_decimal::Decimal;
use tracing::debug;

use crate::{errors::PricingError, items::CartItem};

/// Reject negative unit prices.
pub(crate) fn ensure_price(price: Decimal) -> Result<(), PricingError> {
    ensure(price >= Decimal::ZERO, PricingError::NegativePrice)
}

/// Reject discount percentages outside `0..=100`, lower bound first.
pub(crate) fn ensure_discount(discount_percent: Decimal) -> Result<(), PricingError> {
    ensure(
        discount_percent >= Decimal::ZERO,
        PricingError::NegativeDiscount,
    )?;

    ensure(
        discount_percent <= Decimal::ONE_HUNDRED,
        PricingError::DiscountAboveMaximum,
    )
}

/// Reject negative tax percentages. There is no upper bound.
pub(crate) fn ensure_tax_rate(tax_percent: Decimal) -> Result<(), PricingError> {
    ensure(tax_percent >= Decimal::ZERO, PricingError::NegativeTaxRate)
}

/// Reject the cart if any line has a negative quantity.
///
/// Runs over the whole cart before any totals are accumulated.
pub(crate) fn ensure_quantities(items: &[CartItem]) -> Result<(), PricingError> {
    items.iter().enumerate().try_for_each(|(index, item)| {
        if item.quantity() >= Decimal::ZERO {
            Ok(())
        } else {
            debug!(index, quantity = %item.quantity(), "rejected cart line");
            Err(PricingError::NegativeQuantity)
        }
    })
}

fn ensure(condition: bool, error: PricingError) -> Result<(), PricingError> {
    if condition {
        Ok(())
    } else {
        debug!(%error, "rejected pricing input");
        Err(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_a_valid_price() {
        assert_eq!(ensure_price(Decimal::ZERO), Ok(()));
    }

    #[test]
    fn discount_bounds_are_inclusive() {
        assert_eq!(ensure_discount(Decimal::ZERO), Ok(()));
        assert_eq!(ensure_discount(Decimal::ONE_HUNDRED), Ok(()));
        assert_eq!(
            ensure_discount(Decimal::new(10001, 2)),
            Err(PricingError::DiscountAboveMaximum)
        );
        assert_eq!(
            ensure_discount(Decimal::new(-1, 2)),
            Err(PricingError::NegativeDiscount)
        );
    }

    #[test]
    fn tax_rate_has_no_upper_bound() {
        assert_eq!(ensure_tax_rate(Decimal::ONE_THOUSAND), Ok(()));
    }

    #[test]
    fn quantities_checked_across_whole_cart() {
        let items = [
            CartItem::new(Decimal::ONE, Decimal::ONE),
            CartItem::new(Decimal::NEGATIVE_ONE, Decimal::TWO),
            CartItem::new(Decimal::ONE, Decimal::NEGATIVE_ONE),
        ];

        assert_eq!(
            ensure_quantities(&items),
            Err(PricingError::NegativeQuantity)
        );
    }

    #[test]
    fn empty_cart_has_valid_quantities() {
        assert_eq!(ensure_quantities(&[]), Ok(()));
    }
}
