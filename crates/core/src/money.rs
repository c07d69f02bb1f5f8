//! Money
//!
//! Conversions between decimal amount strings and exact minor units.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};

use crate::normalize::InvalidFormat;

/// Parse a decimal amount such as `"6.49"` into minor units.
///
/// Amounts are parsed as decimals, scaled by 100 and rounded half-up to the
/// nearest cent, so exact-cent inputs never drift by one.
///
/// # Errors
///
/// Returns [`InvalidFormat::Money`] if the text is not a plain non-negative
/// decimal numeral (`digits[.digits]`) or does not fit in `u64` minor units.
pub fn parse_money(text: &str) -> Result<u64, InvalidFormat> {
    if !is_decimal_numeral(text) {
        return Err(InvalidFormat::Money);
    }

    let amount = Decimal::from_str(text).map_err(|_ignored| InvalidFormat::Money)?;

    amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .map(|cents| cents.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|cents| cents.to_u64())
        .ok_or(InvalidFormat::Money)
}

/// Render minor units as a two-decimal amount string.
pub fn format_cents(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

fn is_decimal_numeral(text: &str) -> bool {
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text, None),
    };

    is_digits(whole) && fraction.is_none_or(is_digits)
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|byte| byte.is_ascii_digit())
}
