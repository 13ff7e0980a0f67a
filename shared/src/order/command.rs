//! Intake commands - discrete edits the clerk makes to a draft
//!
//! Numeric values the clerk types travel as raw text; the reducer coerces
//! them, so a bad keystroke never becomes an error.

use super::draft::CustomerField;
use super::types::{MeasurementField, NoteSlot, PaymentMethod};
use crate::models::{Customer, Material};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Intake command payload variants
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntakeCommand {
    // ========== Selection ==========
    SelectEntry {
        material: Material,
    },
    RemoveEntry {
        material_id: i64,
    },
    EditMeasurement {
        material_id: i64,
        field: MeasurementField,
        value: String,
    },
    ResetMeasurements {
        material_id: i64,
    },
    EditNote {
        material_id: i64,
        slot: NoteSlot,
        text: String,
    },
    ClearEntries,

    // ========== Bill lines ==========
    SetQuantity {
        serial: u32,
        quantity: String,
    },
    SetFee {
        serial: u32,
        fee: String,
    },
    AddAdHocLine,
    RemoveLine {
        serial: u32,
    },
    ClearLines,

    // ========== Payment ==========
    SetAdvance {
        advance: String,
    },
    SetPaymentMethod {
        method: PaymentMethod,
    },
    SetCashAmount {
        amount: String,
    },
    SetCardAmount {
        amount: String,
    },

    // ========== Customer & order info ==========
    SelectCustomer {
        customer: Customer,
    },
    ClearCustomer,
    SetCustomerField {
        field: CustomerField,
        value: String,
    },
    SetRemarks {
        remarks: String,
    },
    SetDeliveryDate {
        #[serde(default)]
        date: Option<NaiveDate>,
    },

    // ========== Lifecycle ==========
    /// Discard the draft and start over (cancel)
    Reset,
}

impl IntakeCommand {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            IntakeCommand::SelectEntry { .. } => "SELECT_ENTRY",
            IntakeCommand::RemoveEntry { .. } => "REMOVE_ENTRY",
            IntakeCommand::EditMeasurement { .. } => "EDIT_MEASUREMENT",
            IntakeCommand::ResetMeasurements { .. } => "RESET_MEASUREMENTS",
            IntakeCommand::EditNote { .. } => "EDIT_NOTE",
            IntakeCommand::ClearEntries => "CLEAR_ENTRIES",
            IntakeCommand::SetQuantity { .. } => "SET_QUANTITY",
            IntakeCommand::SetFee { .. } => "SET_FEE",
            IntakeCommand::AddAdHocLine => "ADD_AD_HOC_LINE",
            IntakeCommand::RemoveLine { .. } => "REMOVE_LINE",
            IntakeCommand::ClearLines => "CLEAR_LINES",
            IntakeCommand::SetAdvance { .. } => "SET_ADVANCE",
            IntakeCommand::SetPaymentMethod { .. } => "SET_PAYMENT_METHOD",
            IntakeCommand::SetCashAmount { .. } => "SET_CASH_AMOUNT",
            IntakeCommand::SetCardAmount { .. } => "SET_CARD_AMOUNT",
            IntakeCommand::SelectCustomer { .. } => "SELECT_CUSTOMER",
            IntakeCommand::ClearCustomer => "CLEAR_CUSTOMER",
            IntakeCommand::SetCustomerField { .. } => "SET_CUSTOMER_FIELD",
            IntakeCommand::SetRemarks { .. } => "SET_REMARKS",
            IntakeCommand::SetDeliveryDate { .. } => "SET_DELIVERY_DATE",
            IntakeCommand::Reset => "RESET",
        }
    }
}

impl std::fmt::Display for IntakeCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
