//! Discount and tax calculations through the public API.

use rust_decimal::Decimal;
use testresult::TestResult;

use cart_pricing::prelude::*;

#[test]
fn discount_then_tax_on_single_price() -> TestResult {
    let price = apply_discount(Decimal::new(1999, 2), Decimal::TEN)?;
    let tax = calculate_tax(price, Decimal::new(85, 1), false)?;

    assert_eq!(price, Decimal::new(17991, 3));
    assert_eq!(tax, Decimal::new(153, 2));

    Ok(())
}

#[test]
fn validation_order_is_observable() {
    let cases = [
        (
            apply_discount(Decimal::from(-10), Decimal::from(-5)),
            PricingError::NegativePrice,
        ),
        (
            apply_discount(Decimal::from(10), Decimal::from(-5)),
            PricingError::NegativeDiscount,
        ),
        (
            calculate_tax(Decimal::from(-10), Decimal::from(-5), true),
            PricingError::NegativePrice,
        ),
        (
            calculate_tax(Decimal::from(10), Decimal::from(-5), true),
            PricingError::NegativeTaxRate,
        ),
    ];

    for (result, expected) in cases {
        assert_eq!(result, Err(expected));
    }
}

#[test]
fn tax_has_no_upper_rate_bound() -> TestResult {
    assert_eq!(
        calculate_tax(Decimal::TEN, Decimal::from(250), false)?,
        Decimal::from(25)
    );

    Ok(())
}

#[test]
fn totals_serialize_by_field_name() -> TestResult {
    let totals = calculate_total(
        &[CartItem::new(Decimal::from(4), Decimal::ONE)],
        Decimal::from(5),
        Decimal::TEN,
    )?;

    let rendered = serde_norway::to_string(&totals)?;

    for field in ["subtotal", "discount", "tax", "total"] {
        assert!(rendered.contains(field), "missing {field} in {rendered}");
    }

    Ok(())
}
