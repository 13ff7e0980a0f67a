//! Payment reconciler - advance, balance and the cash/card split
//!
//! Cash-only and card-only tenders carry no amounts of their own; they are
//! read off the total. Only a split stores a pair, and that pair is touched
//! exclusively by a method switch or a split-field edit. A later change of
//! the total leaves it as it was.

use super::money::round2;
use crate::core::ClampPolicy;
use rust_decimal::Decimal;
use shared::order::{OrderTotals, PaymentMethod, Tender};

/// A clerk action on the payment method or a split half
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TenderEdit {
    Method(PaymentMethod),
    Cash(Decimal),
    Card(Decimal),
}

/// balance = total - advance, floored at zero under the clamp policy
pub fn balance(total: Decimal, advance: Decimal, clamp: &ClampPolicy) -> Decimal {
    let balance = total.saturating_sub(advance);
    if clamp.negative_balance && balance.is_sign_negative() {
        Decimal::ZERO
    } else {
        balance
    }
}

/// Recompute balance with the current total and advance
pub fn refresh_balance(totals: &mut OrderTotals, clamp: &ClampPolicy) {
    totals.balance = balance(totals.total, totals.advance, clamp);
}

pub fn set_advance(totals: &mut OrderTotals, advance: Decimal, clamp: &ClampPolicy) {
    totals.advance = advance;
    refresh_balance(totals, clamp);
}

/// Next tender after a method switch or split edit
///
/// - switching to any method resets, even when it is the current one;
///   entering split starts from a fresh half/half of `total`
/// - a split edit sets the edited half and derives the other as
///   `total - edited`; outside split it changes nothing
pub fn reconcile_split(total: Decimal, edit: TenderEdit, prior: Tender, clamp: &ClampPolicy) -> Tender {
    let counterpart = |edited: Decimal| {
        let rest = total.saturating_sub(edited);
        if clamp.negative_split && rest.is_sign_negative() {
            Decimal::ZERO
        } else {
            rest
        }
    };

    match (edit, prior) {
        (TenderEdit::Method(PaymentMethod::Cash), _) => Tender::Cash,
        (TenderEdit::Method(PaymentMethod::Card), _) => Tender::Card,
        (TenderEdit::Method(PaymentMethod::Split), _) => {
            let cash = round2(total / Decimal::TWO);
            Tender::Split {
                cash,
                card: total - cash,
            }
        }
        (TenderEdit::Cash(cash), Tender::Split { .. }) => Tender::Split {
            cash,
            card: counterpart(cash),
        },
        (TenderEdit::Card(card), Tender::Split { .. }) => Tender::Split {
            cash: counterpart(card),
            card,
        },
        (TenderEdit::Cash(_) | TenderEdit::Card(_), prior) => {
            tracing::debug!(method = %prior.method(), "Split edit outside split mode ignored");
            prior
        }
    }
}

/// Apply a tender edit against the current total
pub fn apply_tender_edit(totals: &mut OrderTotals, edit: TenderEdit, clamp: &ClampPolicy) {
    totals.tender = reconcile_split(totals.total, edit, totals.tender, clamp);
}
