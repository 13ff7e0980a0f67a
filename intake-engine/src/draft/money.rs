//! Money calculation and input coercion
//!
//! Every amount is a `Decimal`. Clerk-typed text enters through the
//! `coerce_*` helpers, which never fail: unusable input falls back to the
//! field's default and is logged at debug level. Magnitudes above
//! [`MAX_INPUT`] count as unusable, which keeps line, total and balance
//! arithmetic inside `Decimal` range.

use rust_decimal::prelude::*;
use tracing::debug;

/// Rounding for monetary values (2 decimal places, half away from zero)
const DECIMAL_PLACES: u32 = 2;

/// Largest magnitude accepted from clerk text (one billion)
pub const MAX_INPUT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Round to cents
#[inline]
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// amount = quantity × fee, saturating at the `Decimal` bounds
#[inline]
pub fn line_amount(quantity: u32, fee: Decimal) -> Decimal {
    Decimal::from(quantity).saturating_mul(fee)
}

/// Parse clerk text as a decimal number
///
/// Accepts surrounding whitespace and scientific notation; empty text is
/// not a number, and neither is anything beyond ±[`MAX_INPUT`].
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
        .filter(|d| d.abs() <= MAX_INPUT)
}

/// Quantity: whole number ≥ 0, fractional input truncated, anything else 1
pub fn coerce_quantity(text: &str) -> u32 {
    match parse_decimal(text)
        .filter(|d| !d.is_sign_negative())
        .and_then(|d| d.trunc().to_u32())
    {
        Some(qty) => qty,
        None => {
            debug!(input = text, "Unusable quantity, using 1");
            1
        }
    }
}

/// Fee: decimal ≥ 0 rounded to cents, anything else 0
pub fn coerce_fee(text: &str) -> Decimal {
    match parse_decimal(text).filter(|d| !d.is_sign_negative()) {
        Some(fee) => round2(fee),
        None => {
            debug!(input = text, "Unusable fee, using 0");
            Decimal::ZERO
        }
    }
}

/// Advance, split halves, opening balance: any decimal rounded to cents, otherwise 0
pub fn coerce_amount(text: &str) -> Decimal {
    match parse_decimal(text) {
        Some(amount) => round2(amount),
        None => {
            debug!(input = text, "Unusable amount, using 0");
            Decimal::ZERO
        }
    }
}

/// Measurement: any decimal taken as typed, otherwise 0
pub fn coerce_measurement(text: &str) -> Decimal {
    parse_decimal(text).unwrap_or_else(|| {
        debug!(input = text, "Unusable measurement, using 0");
        Decimal::ZERO
    })
}
