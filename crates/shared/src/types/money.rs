//! Money helpers with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts travel as `rust_decimal::Decimal` and are persisted as integer
//! minor units (cents) so that sums computed by the store stay exact.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits kept for every ledger amount.
pub const MINOR_UNIT_SCALE: u32 = 2;

/// Truncates toward zero to two fractional digits.
///
/// `12.345` becomes `12.34` and `-12.345` becomes `-12.34`; this is not
/// banker's rounding.
#[must_use]
pub fn truncate_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MINOR_UNIT_SCALE, RoundingStrategy::ToZero)
}

/// Converts an amount to integer minor units after truncating to cents.
///
/// Returns `None` when the amount does not fit an `i64` column.
#[must_use]
pub fn to_minor_units(amount: Decimal) -> Option<i64> {
    truncate_to_cents(amount)
        .checked_mul(Decimal::ONE_HUNDRED)?
        .to_i64()
}

/// Converts integer minor units back to a two-digit decimal amount.
#[must_use]
pub fn from_minor_units(cents: i64) -> Decimal {
    Decimal::new(cents, MINOR_UNIT_SCALE)
}
