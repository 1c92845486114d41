//! Errors

use thiserror::Error;

/// Invalid input rejected by one of the pricing functions.
///
/// Every variant displays as a fixed, user-presentable message. When several inputs are invalid
/// at once, the variant returned is determined by the documented validation order of the
/// function that was called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PricingError {
    /// A unit price was below zero.
    #[error("Price cannot be negative")]
    NegativePrice,

    /// A discount percentage was below zero.
    #[error("Discount cannot be negative")]
    NegativeDiscount,

    /// A discount percentage was above 100.
    #[error("Discount cannot exceed 100%")]
    DiscountAboveMaximum,

    /// A tax percentage was below zero.
    #[error("Tax rate cannot be negative")]
    NegativeTaxRate,

    /// A cart line had a quantity below zero.
    #[error("Cart item quantity cannot be negative")]
    NegativeQuantity,

    /// Decimal arithmetic left the representable range.
    #[error("Amount exceeds the representable decimal range")]
    Overflow,
}
