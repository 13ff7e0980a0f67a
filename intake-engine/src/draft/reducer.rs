//! Intake reducer - the single entry point for draft edits
//!
//! `apply` mutates a draft in place and runs every downstream recomputation
//! before returning, always in the same order:
//! selection → derivation → line edits → totals → payment.
//! `reduce` is the by-value form.

use super::{customer, derivation, line_editor, money, payment, registry, totals};
use super::payment::TenderEdit;
use crate::core::IntakeConfig;
use shared::order::{IntakeCommand, OrderDraft};
use tracing::debug;

/// Fold one command into the draft, returning the next draft
pub fn reduce(mut draft: OrderDraft, command: &IntakeCommand, config: &IntakeConfig) -> OrderDraft {
    apply(&mut draft, command, config);
    draft
}

/// Apply one command to the draft in place
pub fn apply(draft: &mut OrderDraft, command: &IntakeCommand, config: &IntakeConfig) {
    debug!(draft_id = %draft.draft_id, command = %command, "[Reducer] apply");
    let clamp = &config.clamp;

    match command {
        // ========== Selection ==========
        IntakeCommand::SelectEntry { material } => {
            if registry::select(&mut draft.entries, material) {
                regenerate_lines(draft, config);
            }
        }
        IntakeCommand::RemoveEntry { material_id } => {
            if registry::remove(&mut draft.entries, *material_id) {
                regenerate_lines(draft, config);
            }
        }
        IntakeCommand::EditMeasurement {
            material_id,
            field,
            value,
        } => {
            let value = money::coerce_measurement(value);
            registry::edit_measurement(&mut draft.entries, *material_id, *field, value);
        }
        IntakeCommand::ResetMeasurements { material_id } => {
            registry::reset_measurements(&mut draft.entries, *material_id);
        }
        IntakeCommand::EditNote {
            material_id,
            slot,
            text,
        } => {
            registry::edit_note(&mut draft.entries, *material_id, *slot, text);
        }
        IntakeCommand::ClearEntries => {
            registry::clear_all(&mut draft.entries);
            regenerate_lines(draft, config);
        }

        // ========== Bill lines ==========
        IntakeCommand::SetQuantity { serial, quantity } => {
            let quantity = money::coerce_quantity(quantity);
            if line_editor::set_quantity(&mut draft.lines, *serial, quantity) {
                totals::recalculate_totals(&mut draft.totals, &draft.lines, clamp);
            }
        }
        IntakeCommand::SetFee { serial, fee } => {
            let fee = money::coerce_fee(fee);
            if line_editor::set_fee(&mut draft.lines, *serial, fee) {
                totals::recalculate_totals(&mut draft.totals, &draft.lines, clamp);
            }
        }
        IntakeCommand::AddAdHocLine => {
            line_editor::add_ad_hoc_line(&mut draft.lines, config);
            totals::recalculate_totals(&mut draft.totals, &draft.lines, clamp);
        }
        IntakeCommand::RemoveLine { serial } => {
            if line_editor::remove_line(&mut draft.lines, *serial) {
                totals::recalculate_totals(&mut draft.totals, &draft.lines, clamp);
            }
        }
        IntakeCommand::ClearLines => {
            line_editor::clear_all(&mut draft.lines);
            totals::recalculate_totals(&mut draft.totals, &draft.lines, clamp);
        }

        // ========== Payment ==========
        IntakeCommand::SetAdvance { advance } => {
            payment::set_advance(&mut draft.totals, money::coerce_amount(advance), clamp);
        }
        IntakeCommand::SetPaymentMethod { method } => {
            payment::apply_tender_edit(&mut draft.totals, TenderEdit::Method(*method), clamp);
        }
        IntakeCommand::SetCashAmount { amount } => {
            let edit = TenderEdit::Cash(money::coerce_amount(amount));
            payment::apply_tender_edit(&mut draft.totals, edit, clamp);
        }
        IntakeCommand::SetCardAmount { amount } => {
            let edit = TenderEdit::Card(money::coerce_amount(amount));
            payment::apply_tender_edit(&mut draft.totals, edit, clamp);
        }

        // ========== Customer & order info ==========
        IntakeCommand::SelectCustomer { customer } => {
            customer::select_customer(&mut draft.customer, customer);
        }
        IntakeCommand::ClearCustomer => customer::clear_customer(&mut draft.customer),
        IntakeCommand::SetCustomerField { field, value } => {
            customer::set_customer_field(&mut draft.customer, *field, value);
        }
        IntakeCommand::SetRemarks { remarks } => draft.remarks = remarks.clone(),
        IntakeCommand::SetDeliveryDate { date } => draft.delivery_date = *date,

        // ========== Lifecycle ==========
        IntakeCommand::Reset => *draft = OrderDraft::new(),
    }
}

/// The selected set changed: rebuild the bill, then the totals
fn regenerate_lines(draft: &mut OrderDraft, config: &IntakeConfig) {
    draft.lines = derivation::derive_lines(&draft.entries, &draft.lines, &draft.remarks, config);
    totals::recalculate_totals(&mut draft.totals, &draft.lines, &config.clamp);
}
