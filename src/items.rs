//! Items

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::PricingError;

/// A single line in a cart.
///
/// Quantities may be fractional, for goods sold by weight. Items deserialize with
/// `is_tax_exempt` defaulting to `false` when the field is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    price: Decimal,
    quantity: Decimal,
    #[serde(default, alias = "isTaxExempt")]
    is_tax_exempt: bool,
}

impl CartItem {
    /// Creates a taxable line with the given unit price and quantity.
    pub fn new(price: Decimal, quantity: Decimal) -> Self {
        Self {
            price,
            quantity,
            is_tax_exempt: false,
        }
    }

    /// Creates a tax-exempt line with the given unit price and quantity.
    pub fn tax_exempt(price: Decimal, quantity: Decimal) -> Self {
        Self::new(price, quantity).with_tax_exempt(true)
    }

    /// Returns the line with its tax exemption set to `is_tax_exempt`.
    #[must_use]
    pub fn with_tax_exempt(self, is_tax_exempt: bool) -> Self {
        Self {
            is_tax_exempt,
            ..self
        }
    }

    /// Returns the unit price
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Returns the quantity
    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    /// Returns whether the line is exempt from tax
    pub fn is_tax_exempt(&self) -> bool {
        self.is_tax_exempt
    }

    /// Returns `price * quantity`.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the product cannot be represented.
    pub fn line_total(&self) -> Result<Decimal, PricingError> {
        self.price
            .checked_mul(self.quantity)
            .ok_or(PricingError::Overflow)
    }
}
