// Pure pricing rules for reservations

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::coupons::WELCOME_COUPON_CODE;

/// 10% off when the welcome coupon applies
const DISCOUNT_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// 5% of the final price comes back as a cashback coupon
const CASHBACK_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Priced outcome of a reservation request
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    pub original_price: Decimal,
    pub final_price: Decimal,
    pub discount_amount: Decimal,
    pub coupon_applied: bool,
}

/// Price an item against an optional coupon code
///
/// The discount applies only when the code matches the welcome coupon
/// (case-insensitive) and the item is flagged coupon-eligible. Any
/// other code is ignored rather than rejected, so the booking still
/// goes through at full price.
pub fn quote(original_price: Decimal, has_coupon: bool, coupon_code: Option<&str>) -> PriceQuote {
    let coupon_applied = has_coupon
        && coupon_code
            .map(|code| code.eq_ignore_ascii_case(WELCOME_COUPON_CODE))
            .unwrap_or(false);

    let discount_amount = if coupon_applied {
        original_price * DISCOUNT_RATE
    } else {
        Decimal::ZERO
    };

    PriceQuote {
        original_price,
        final_price: original_price - discount_amount,
        discount_amount,
        coupon_applied,
    }
}

/// Cashback points earned on a paid tour booking
pub fn cashback_points(final_price: Decimal) -> Decimal {
    final_price * CASHBACK_RATE
}

/// Cashback coupon code derived from the reservation id
pub fn cashback_code(reservation_id: Uuid) -> String {
    let id = reservation_id.to_string();
    format!("CASHBACK-{}", id[..8].to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_welcome_coupon_discounts_eligible_item() {
        let q = quote(dec!(200), true, Some("WELCOME10"));
        assert!(q.coupon_applied);
        assert_eq!(q.discount_amount, dec!(20.00));
        assert_eq!(q.final_price, dec!(180.00));
    }

    #[test]
    fn test_coupon_code_is_case_insensitive() {
        let q = quote(dec!(100), true, Some("welcome10"));
        assert!(q.coupon_applied);
        assert_eq!(q.final_price, dec!(90.00));
    }

    #[test]
    fn test_unknown_code_passes_through_at_full_price() {
        let q = quote(dec!(100), true, Some("SUMMER20"));
        assert!(!q.coupon_applied);
        assert_eq!(q.discount_amount, Decimal::ZERO);
        assert_eq!(q.final_price, dec!(100));
    }

    #[test]
    fn test_ineligible_item_gets_no_discount() {
        let q = quote(dec!(100), false, Some("WELCOME10"));
        assert!(!q.coupon_applied);
        assert_eq!(q.final_price, dec!(100));
    }

    #[test]
    fn test_no_code_means_full_price() {
        let q = quote(dec!(150), true, None);
        assert!(!q.coupon_applied);
        assert_eq!(q.final_price, dec!(150));
    }

    #[test]
    fn test_cashback_is_five_percent_of_final() {
        assert_eq!(cashback_points(dec!(180.00)), dec!(9.0000));
        assert_eq!(cashback_points(dec!(100)), dec!(5.00));
    }

    #[test]
    fn test_cashback_code_uses_first_eight_of_id() {
        let id = Uuid::parse_str("a1b2c3d4-0000-0000-0000-000000000000").unwrap();
        assert_eq!(cashback_code(id), "CASHBACK-A1B2C3D4");
    }

    proptest! {
        #[test]
        fn prop_discount_is_zero_or_ten_percent(
            cents in 0i64..10_000_000,
            has_coupon: bool,
            code in proptest::option::of("[A-Za-z0-9]{1,12}"),
        ) {
            let price = Decimal::new(cents, 2);
            let q = quote(price, has_coupon, code.as_deref());
            if q.coupon_applied {
                prop_assert_eq!(q.discount_amount, price * dec!(0.10));
            } else {
                prop_assert_eq!(q.discount_amount, Decimal::ZERO);
            }
        }

        #[test]
        fn prop_final_never_exceeds_original(
            cents in 0i64..10_000_000,
            has_coupon: bool,
            code in proptest::option::of("[A-Za-z0-9]{1,12}"),
        ) {
            let price = Decimal::new(cents, 2);
            let q = quote(price, has_coupon, code.as_deref());
            prop_assert!(q.final_price <= q.original_price);
            prop_assert_eq!(q.original_price - q.final_price, q.discount_amount);
        }

        #[test]
        fn prop_cashback_is_five_percent(cents in 0i64..10_000_000) {
            let price = Decimal::new(cents, 2);
            prop_assert_eq!(cashback_points(price), price * dec!(0.05));
        }
    }
}
