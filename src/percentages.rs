//! Percentages
//!
//! Rates are written in percent points, so `8.5` means 8.5%.

use rust_decimal::Decimal;

use crate::errors::PricingError;

/// Converts percent points into a fraction of one.
pub(crate) fn fraction(percent: Decimal) -> Result<Decimal, PricingError> {
    percent
        .checked_div(Decimal::ONE_HUNDRED)
        .ok_or(PricingError::Overflow)
}

/// Returns `percent` percent of `amount`, unrounded.
pub(crate) fn percent_of(amount: Decimal, percent: Decimal) -> Result<Decimal, PricingError> {
    amount
        .checked_mul(fraction(percent)?)
        .ok_or(PricingError::Overflow)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn fraction_shifts_two_places() -> TestResult {
        assert_eq!(fraction(Decimal::new(85, 1))?, Decimal::new(85, 3));

        Ok(())
    }

    #[test]
    fn percent_of_keeps_full_precision() -> TestResult {
        let price = Decimal::new(1999, 2);

        assert_eq!(percent_of(price, Decimal::TEN)?, Decimal::new(1999, 3));

        Ok(())
    }

    #[test]
    fn percent_of_reports_overflow() {
        assert_eq!(
            percent_of(Decimal::MAX, Decimal::ONE_THOUSAND),
            Err(PricingError::Overflow)
        );
    }
}
