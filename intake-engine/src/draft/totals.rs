//! Totals aggregator

use super::payment::refresh_balance;
use crate::core::ClampPolicy;
use rust_decimal::Decimal;
use shared::order::{BillLineItem, OrderTotals};
use tracing::debug;

/// Sum of all line amounts, saturating at the `Decimal` bounds
pub fn sum_lines(lines: &[BillLineItem]) -> Decimal {
    lines
        .iter()
        .fold(Decimal::ZERO, |acc, l| acc.saturating_add(l.amount))
}

/// Recompute the total from the lines, then the balance
///
/// Advance and tender are left untouched.
pub fn recalculate_totals(totals: &mut OrderTotals, lines: &[BillLineItem], clamp: &ClampPolicy) {
    totals.total = sum_lines(lines);
    refresh_balance(totals, clamp);
    debug!(
        lines = lines.len(),
        total = %totals.total,
        advance = %totals.advance,
        balance = %totals.balance,
        "Totals recalculated"
    );
}
