//! Cart Pricing
//!
//! Discount, tax and total calculations for shopping carts. Every operation is a pure function
//! over [`rust_decimal::Decimal`] amounts, with rates written in percent points.
//!
//! ```
//! use cart_pricing::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let items = [
//!     CartItem::new(Decimal::from(4), Decimal::ONE),
//!     CartItem::tax_exempt(Decimal::from(28), Decimal::TWO),
//! ];
//!
//! let totals = calculate_total(&items, Decimal::ZERO, Decimal::TEN)?;
//!
//! assert_eq!(totals.subtotal(), Decimal::from(60));
//! assert_eq!(totals.tax(), Decimal::new(4, 1));
//! assert_eq!(totals.total(), Decimal::new(604, 1));
//! # Ok::<(), PricingError>(())
//! ```

pub mod discounts;
pub mod errors;
pub mod items;
pub mod prelude;
pub mod tax;
pub mod totals;

mod percentages;
mod validation;
