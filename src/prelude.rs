//! Cart pricing prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    discounts::apply_discount,
    errors::PricingError,
    items::CartItem,
    tax::{TAX_DECIMAL_PLACES, calculate_tax},
    totals::{CartRates, CartTotals, calculate_total},
};
