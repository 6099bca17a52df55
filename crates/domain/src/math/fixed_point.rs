//! Exact conversion between scaled integers and human decimal strings.
//!
//! No floating point is involved in either direction: values are split and
//! assembled with integer division and digit strings only.

use crate::error::{DistributionError, Result};
use crate::token::ScaledAmount;
use primitive_types::{U256, U512};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Largest exponent whose power of ten fits in 256 bits.
pub const MAX_U256_EXPONENT: u8 = 77;

/// Largest fractional precision `format_percentage` honours.
///
/// Keeps `numerator * 10^(precision + 2)` inside a 512-bit intermediate for
/// every 256-bit numerator.
pub const MAX_PERCENT_PRECISION: u8 = 75;

/// Returns `10^exponent`, or `None` when it does not fit in 256 bits.
pub fn pow10(exponent: u8) -> Option<U256> {
    (exponent <= MAX_U256_EXPONENT).then(|| U256::exp10(exponent as usize))
}

/// Renders `amount` scaled down by `10^exponent`.
///
/// Trailing zeros of the fraction are removed and a zero fraction is
/// omitted entirely, so `1_500_000` at exponent 6 renders as `"1.5"` and
/// `1_000_000` as `"1"`.
pub fn to_display_string(amount: ScaledAmount, exponent: u8) -> String {
    let (whole, fraction) = match pow10(exponent) {
        Some(scale) => amount.0.div_mod(scale),
        // every 256-bit value is below 10^78
        None => (U256::zero(), amount.0),
    };

    render(&whole.to_string(), &fraction.to_string(), exponent as usize)
}

/// Parses a non-negative decimal numeral into an amount scaled by
/// `10^exponent`.
///
/// Accepted forms are `digits` and `digits.digits`, with surrounding
/// whitespace ignored. Fractional digits past `exponent` are rounded half
/// up.
///
/// # Errors
///
/// - [`DistributionError::InvalidAmountFormat`] for empty input, signs,
///   exponent notation, stray characters, or values above 256 bits
pub fn parse_from_display_string(text: &str, exponent: u8) -> Result<ScaledAmount> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(DistributionError::invalid_amount(text, "empty input"));
    }

    let (int_part, frac_part) = match trimmed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (trimmed, ""),
    };

    if int_part.is_empty() || !is_digits(int_part) {
        return Err(DistributionError::invalid_amount(
            text,
            "expected digits before the decimal point",
        ));
    }
    if trimmed.contains('.') && (frac_part.is_empty() || !is_digits(frac_part)) {
        return Err(DistributionError::invalid_amount(
            text,
            "expected digits after the decimal point",
        ));
    }

    let scale = exponent as usize;
    let (kept, dropped) = if frac_part.len() > scale {
        frac_part.split_at(scale)
    } else {
        (frac_part, "")
    };

    let mut digits = String::with_capacity(int_part.len() + scale);
    digits.push_str(int_part);
    digits.push_str(kept);
    digits.extend(std::iter::repeat_n('0', scale - kept.len()));

    let mut value = U256::from_dec_str(&digits)
        .map_err(|_| DistributionError::invalid_amount(text, "value exceeds 256 bits"))?;

    if dropped.as_bytes().first().is_some_and(|d| *d >= b'5') {
        value = value
            .checked_add(U256::one())
            .ok_or_else(|| DistributionError::invalid_amount(text, "value exceeds 256 bits"))?;
    }

    Ok(ScaledAmount(value))
}

/// Formats `numerator / denominator` as a percentage with at most
/// `precision_digits` fractional digits, truncated rather than rounded.
///
/// A zero denominator yields `"0%"`.
pub fn format_percentage(
    numerator: ScaledAmount,
    denominator: ScaledAmount,
    precision_digits: u8,
) -> String {
    if denominator.is_zero() {
        return "0%".to_string();
    }

    let precision = precision_digits.min(MAX_PERCENT_PRECISION) as usize;
    let scaled = U512::from(numerator.0) * U512::exp10(precision + 2) / U512::from(denominator.0);
    let (whole, fraction) = scaled.div_mod(U512::exp10(precision));

    let mut out = render(&whole.to_string(), &fraction.to_string(), precision);
    out.push('%');
    out
}

/// Exact `Decimal` value of `amount / 10^exponent`.
///
/// Returns `None` when the value does not fit `Decimal`'s 96-bit mantissa
/// or its 28-digit scale limit.
pub fn to_decimal(amount: ScaledAmount, exponent: u8) -> Option<Decimal> {
    Decimal::from_str(&to_display_string(amount, exponent)).ok()
}

/// Lossy `f64` value of `amount / 10^exponent`, for estimates only.
pub fn to_f64(amount: ScaledAmount, exponent: u8) -> f64 {
    to_display_string(amount, exponent)
        .parse::<f64>()
        .unwrap_or(0.0)
}

/// Narrows a 512-bit intermediate back to 256 bits, `None` on overflow.
pub(crate) fn narrow(value: U512) -> Option<U256> {
    if value > U512::from(U256::MAX) {
        return None;
    }
    let U512(limbs) = value;
    Some(U256([limbs[0], limbs[1], limbs[2], limbs[3]]))
}

fn render(whole: &str, fraction: &str, width: usize) -> String {
    if width == 0 {
        return whole.to_string();
    }

    let padded = format!("{fraction:0>width$}");
    let stripped = padded.trim_end_matches('0');
    if stripped.is_empty() {
        whole.to_string()
    } else {
        format!("{whole}.{stripped}")
    }
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}
