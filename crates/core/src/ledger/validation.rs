//! Input validation for ledger writes.
//!
//! These functions only look at the submitted value; checks that depend on
//! ledger state live in [`LedgerService`](super::LedgerService).

use std::str::FromStr;

use chrono::NaiveDate;
use fintrack_shared::types::money::{MINOR_UNIT_SCALE, to_minor_units, truncate_to_cents};
use rust_decimal::Decimal;

use super::error::FinanceError;
use super::investment::InvestmentType;

/// Parses a raw amount and normalizes it to cents.
///
/// The value is truncated toward zero to two fractional digits and must be
/// strictly positive afterwards, so `"12.345"` yields `12.34` while `"0"`,
/// `"-5"` and `"0.009"` are rejected.
///
/// # Errors
///
/// Returns `FinanceError::InvalidAmount` on unparsable or non-positive input.
pub fn validate_amount(raw: &str) -> Result<Decimal, FinanceError> {
    let trimmed = raw.trim();
    let parsed = Decimal::from_str(trimmed)
        .map_err(|_| FinanceError::InvalidAmount(raw.to_string()))?;
    normalize_amount(parsed).map_err(|_| FinanceError::InvalidAmount(raw.to_string()))
}

/// Applies the amount rule to an already-decoded decimal.
///
/// # Errors
///
/// Returns `FinanceError::InvalidAmount` if the truncated amount is not
/// strictly positive or does not fit the minor-unit column.
pub fn normalize_amount(amount: Decimal) -> Result<Decimal, FinanceError> {
    let truncated = truncate_to_cents(amount);
    if truncated <= Decimal::ZERO || to_minor_units(truncated).is_none() {
        return Err(FinanceError::InvalidAmount(amount.to_string()));
    }
    let mut normalized = truncated;
    normalized.rescale(MINOR_UNIT_SCALE);
    Ok(normalized)
}

/// Parses an ISO `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns `FinanceError::InvalidDate` on malformed input.
pub fn validate_date(raw: &str) -> Result<NaiveDate, FinanceError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| FinanceError::InvalidDate(raw.to_string()))
}

/// Trims a category name.
///
/// # Errors
///
/// Returns `FinanceError::EmptyCategory` if nothing is left after trimming.
pub fn validate_category(raw: &str) -> Result<String, FinanceError> {
    let category = raw.trim();
    if category.is_empty() {
        return Err(FinanceError::EmptyCategory);
    }
    Ok(category.to_string())
}

/// Resolves an investment type label.
///
/// # Errors
///
/// Returns `FinanceError::InvalidInvestmentType` for empty or unknown labels.
pub fn validate_investment_type(raw: &str) -> Result<InvestmentType, FinanceError> {
    InvestmentType::from_str(raw)
}
