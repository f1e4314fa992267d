//! Property-based tests for amount normalization.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::error::FinanceError;
use super::validation::{normalize_amount, validate_amount};

/// Strategy to generate a valid positive amount in cents (0.01 to 1,000,000.00).
fn positive_cents() -> impl Strategy<Value = i64> {
    1i64..100_000_000i64
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Extra fractional digits are dropped, never rounded up.
    #[test]
    fn prop_amount_truncates_toward_zero(
        cents in positive_cents(),
        extra in 0u32..1000,
    ) {
        let raw = format!("{}{:03}", Decimal::new(cents, 2), extra);
        let amount = validate_amount(&raw).unwrap();

        prop_assert_eq!(amount, Decimal::new(cents, 2));
        prop_assert_eq!(amount.scale(), 2);
    }

    /// Normalized amounts are always strictly positive with two digits.
    #[test]
    fn prop_normalized_amount_is_positive_cents(raw in -1_000_000_000i64..1_000_000_000i64, scale in 0u32..6) {
        let amount = Decimal::new(raw, scale);
        match normalize_amount(amount) {
            Ok(normalized) => {
                prop_assert!(normalized > Decimal::ZERO);
                prop_assert!(normalized <= amount);
                prop_assert_eq!(normalized.scale(), 2);
            }
            Err(FinanceError::InvalidAmount(_)) => {
                prop_assert!(amount < Decimal::new(1, 2));
            }
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }

    /// Non-positive amounts are always rejected.
    #[test]
    fn prop_non_positive_rejected(cents in 0i64..100_000_000i64) {
        let result = normalize_amount(Decimal::new(-cents, 2));
        prop_assert!(matches!(result, Err(FinanceError::InvalidAmount(_))));
    }
}
