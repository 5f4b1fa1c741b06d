//! Price derivation for line items and payments.
//!
//! Both functions are pure: the write paths in `order_detail` and `payment`
//! call them inside their database transaction and store the result, ignoring
//! whatever price or amount the caller may have had.

use crate::{
    entities::order_detail,
    errors::{Error, Result},
};
use sea_orm::prelude::Decimal;

/// Largest catalog price: ten digits, two of them after the decimal point.
#[must_use]
pub fn max_price() -> Decimal {
    Decimal::new(9_999_999_999, PRICE_SCALE)
}

const PRICE_SCALE: u32 = 2;

fn invalid_amount(amount: Decimal) -> Error {
    Error::InvalidAmount {
        amount: amount.to_string(),
    }
}

/// Checks a catalog price: not negative, at most [`max_price`], and no finer
/// than cents.
///
/// # Errors
/// Returns [`Error::InvalidAmount`] when the price is outside those bounds.
pub fn ensure_price(price: Decimal) -> Result<()> {
    if price < Decimal::ZERO || price > max_price() || price.normalize().scale() > PRICE_SCALE {
        return Err(invalid_amount(price));
    }
    Ok(())
}

/// Computes a line price as `unit_price * quantity`.
///
/// # Errors
/// - [`Error::MissingQuantity`] when the quantity has not been specified
/// - [`Error::InvalidQuantity`] when the quantity is zero or negative
/// - [`Error::InvalidAmount`] when the unit price is negative or the product
///   does not fit in a [`Decimal`]
pub fn compute_line_price(unit_price: Decimal, quantity: Option<i16>) -> Result<Decimal> {
    let quantity = quantity.ok_or(Error::MissingQuantity)?;
    if quantity <= 0 {
        return Err(Error::InvalidQuantity {
            quantity: i32::from(quantity),
        });
    }
    if unit_price < Decimal::ZERO {
        return Err(invalid_amount(unit_price));
    }

    unit_price
        .checked_mul(Decimal::from(quantity))
        .ok_or_else(|| invalid_amount(unit_price))
}

/// Sums the stored line prices of an order. An order without lines costs zero.
///
/// # Errors
/// Returns [`Error::InvalidAmount`] if the total does not fit in a [`Decimal`].
pub fn compute_payment_amount(line_items: &[order_detail::Model]) -> Result<Decimal> {
    line_items.iter().try_fold(Decimal::ZERO, |total, item| {
        total
            .checked_add(item.price)
            .ok_or_else(|| invalid_amount(item.price))
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use sea_orm::prelude::Uuid;

    fn line(price: Decimal) -> order_detail::Model {
        order_detail::Model {
            order_detail_id: Uuid::new_v4(),
            order_id: Uuid::nil(),
            book_id: Uuid::nil(),
            quantity: Some(1),
            price,
        }
    }

    #[test]
    fn test_compute_line_price() {
        let price = compute_line_price(Decimal::new(1250, 2), Some(3)).unwrap();
        assert_eq!(price, Decimal::new(3750, 2));

        // Recomputing from the same inputs is stable
        let again = compute_line_price(Decimal::new(1250, 2), Some(3)).unwrap();
        assert_eq!(price, again);
    }

    #[test]
    fn test_compute_line_price_free_item() {
        let price = compute_line_price(Decimal::ZERO, Some(4)).unwrap();
        assert_eq!(price, Decimal::ZERO);
    }

    #[test]
    fn test_compute_line_price_rejects_missing_quantity() {
        let result = compute_line_price(Decimal::new(500, 2), None);
        assert!(matches!(result, Err(Error::MissingQuantity)));
    }

    #[test]
    fn test_compute_line_price_rejects_non_positive_quantity() {
        let result = compute_line_price(Decimal::new(500, 2), Some(0));
        assert!(matches!(result, Err(Error::InvalidQuantity { quantity: 0 })));

        let result = compute_line_price(Decimal::new(500, 2), Some(-2));
        assert!(matches!(result, Err(Error::InvalidQuantity { quantity: -2 })));
    }

    #[test]
    fn test_compute_line_price_rejects_negative_price() {
        let result = compute_line_price(Decimal::new(-100, 2), Some(1));
        assert!(matches!(result, Err(Error::InvalidAmount { amount: _ })));
    }

    #[test]
    fn test_compute_line_price_overflow_is_an_error() {
        let result = compute_line_price(Decimal::MAX, Some(2));
        assert!(matches!(result, Err(Error::InvalidAmount { amount: _ })));
    }

    #[test]
    fn test_compute_payment_amount() {
        let items = vec![line(Decimal::new(3750, 2)), line(Decimal::new(725, 2))];
        assert_eq!(compute_payment_amount(&items).unwrap(), Decimal::new(4475, 2));
    }

    #[test]
    fn test_compute_payment_amount_empty_order() {
        assert_eq!(compute_payment_amount(&[]).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_compute_payment_amount_overflow_is_an_error() {
        let items = vec![line(Decimal::MAX), line(Decimal::ONE)];
        let result = compute_payment_amount(&items);
        assert!(matches!(result, Err(Error::InvalidAmount { amount: _ })));
    }

    #[test]
    fn test_ensure_price_bounds() {
        assert_eq!(max_price().to_string(), "99999999.99");
        assert!(ensure_price(Decimal::ZERO).is_ok());
        assert!(ensure_price(Decimal::new(1250, 2)).is_ok());
        assert!(ensure_price(max_price()).is_ok());
        // Trailing zeros beyond cents are fine
        assert!(ensure_price(Decimal::new(12_500, 3)).is_ok());

        for bad in [
            Decimal::new(-1, 2),
            Decimal::new(10_000_000_000, 2),
            Decimal::new(1_001, 3),
            Decimal::MAX,
        ] {
            assert!(
                matches!(ensure_price(bad), Err(Error::InvalidAmount { amount: _ })),
                "{bad} should be rejected"
            );
        }
    }
}
