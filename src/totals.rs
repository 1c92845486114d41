//! Totals

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    errors::PricingError, items::CartItem, percentages::percent_of, tax::calculate_tax,
    validation::ensure_quantities,
};

/// Aggregate prices for a cart.
///
/// Only [`calculate_total`] builds these, so `total` always equals
/// `subtotal - discount + tax`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartTotals {
    subtotal: Decimal,
    discount: Decimal,
    tax: Decimal,
    total: Decimal,
}

impl CartTotals {
    /// Sum of `price * quantity` over every line, before discount and tax.
    pub fn subtotal(&self) -> Decimal {
        self.subtotal
    }

    /// Amount taken off the subtotal.
    pub fn discount(&self) -> Decimal {
        self.discount
    }

    /// Tax owed across every taxable line.
    pub fn tax(&self) -> Decimal {
        self.tax
    }

    /// Amount due.
    pub fn total(&self) -> Decimal {
        self.total
    }
}

/// Cart-level rates, in percent points.
///
/// Both default to zero. Also deserializes from `discountPercent` and `taxRate`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartRates {
    /// Discount taken off the cart subtotal.
    #[serde(default, alias = "discountPercent")]
    pub discount_percent: Decimal,

    /// Tax charged on each taxable unit.
    #[serde(default, alias = "taxRate")]
    pub tax_rate: Decimal,
}

impl CartRates {
    /// Creates a new set of rates
    pub fn new(discount_percent: Decimal, tax_rate: Decimal) -> Self {
        Self {
            discount_percent,
            tax_rate,
        }
    }

    /// Calculates the totals for `items` at these rates.
    ///
    /// # Errors
    ///
    /// See [`calculate_total`].
    pub fn totals(&self, items: &[CartItem]) -> Result<CartTotals, PricingError> {
        calculate_total(items, self.discount_percent, self.tax_rate)
    }
}

/// Calculates subtotal, discount, tax and total for a cart.
///
/// The discount is taken once from the cart subtotal and is not range checked, unlike
/// [`apply_discount`](crate::discounts::apply_discount). Tax is calculated and rounded per unit
/// with [`calculate_tax`], then multiplied by the line quantity.
///
/// # Errors
///
/// - [`PricingError::NegativeQuantity`]: any line has a negative quantity. Every line is checked
///   before anything is summed.
/// - [`PricingError::NegativePrice`]: any line has a negative price, tax exempt or not.
/// - [`PricingError::NegativeTaxRate`]: `tax_rate` is negative and the cart is not empty.
/// - [`PricingError::Overflow`]: an amount cannot be represented.
pub fn calculate_total(
    items: &[CartItem],
    discount_percent: Decimal,
    tax_rate: Decimal,
) -> Result<CartTotals, PricingError> {
    ensure_quantities(items)?;

    let subtotal = items.iter().try_fold(Decimal::ZERO, |subtotal, item| {
        checked_add(subtotal, item.line_total()?)
    })?;

    let discount = percent_of(subtotal, discount_percent)?;

    let tax = items
        .iter()
        .enumerate()
        .try_fold(Decimal::ZERO, |tax, (index, item)| {
            let unit_tax = calculate_tax(item.price(), tax_rate, item.is_tax_exempt())?;
            let line_tax = unit_tax
                .checked_mul(item.quantity())
                .ok_or(PricingError::Overflow)?;

            trace!(index, %unit_tax, %line_tax, "taxed cart line");

            checked_add(tax, line_tax)
        })?;

    let total = subtotal
        .checked_sub(discount)
        .and_then(|discounted| discounted.checked_add(tax))
        .ok_or(PricingError::Overflow)?;

    debug!(
        items = items.len(),
        %subtotal,
        %discount,
        %tax,
        %total,
        "calculated cart totals"
    );

    Ok(CartTotals {
        subtotal,
        discount,
        tax,
        total,
    })
}

fn checked_add(lhs: Decimal, rhs: Decimal) -> Result<Decimal, PricingError> {
    lhs.checked_add(rhs).ok_or(PricingError::Overflow)
}
