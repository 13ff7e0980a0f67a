//! Order draft - the state of one job order while the clerk composes it
//!
//! The draft is a plain value: every edit produces the next draft through
//! the intake reducer, so it can be cloned, compared and serialized freely.

use super::types::{BillLineItem, SelectedEntry, Tender};
use crate::models::Customer;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Customer fields the clerk can type when no existing customer is picked
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct InlineCustomer {
    pub customer_no: String,
    pub name: String,
    pub phone: String,
    pub opening_balance: Decimal,
}

/// Addresses one field of [`InlineCustomer`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CustomerField {
    CustomerNo,
    Name,
    Phone,
    OpeningBalance,
}

/// Who the order is for
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CustomerRef {
    /// Picked from the customer directory
    Existing(Customer),
    /// To be created together with the order
    Inline(InlineCustomer),
}

impl Default for CustomerRef {
    fn default() -> Self {
        CustomerRef::Inline(InlineCustomer::default())
    }
}

impl CustomerRef {
    /// Balance shown next to the customer on the intake form
    pub fn current_balance(&self) -> Decimal {
        match self {
            CustomerRef::Existing(customer) => customer.balance,
            CustomerRef::Inline(inline) => inline.opening_balance,
        }
    }
}

/// Aggregate billing state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OrderTotals {
    /// Sum of all line amounts
    pub total: Decimal,
    /// Paid up front
    pub advance: Decimal,
    /// total - advance
    pub balance: Decimal,
    pub tender: Tender,
}

impl OrderTotals {
    /// Cash portion as it would be recorded on the payment
    pub fn cash_amount(&self) -> Decimal {
        match self.tender {
            Tender::Cash => self.total,
            Tender::Card => Decimal::ZERO,
            Tender::Split { cash, .. } => cash,
        }
    }

    /// Card portion as it would be recorded on the payment
    pub fn card_amount(&self) -> Decimal {
        match self.tender {
            Tender::Cash => Decimal::ZERO,
            Tender::Card => self.total,
            Tender::Split { card, .. } => card,
        }
    }
}

/// Job order being composed at the intake desk
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderDraft {
    /// Local draft ID (never sent to the back office)
    pub draft_id: String,
    pub customer: CustomerRef,
    /// Order-level remarks, also the default remarks of derived lines
    #[serde(default)]
    pub remarks: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<NaiveDate>,
    /// Selected materials in selection order
    pub entries: Vec<SelectedEntry>,
    pub lines: Vec<BillLineItem>,
    pub totals: OrderTotals,
}

impl OrderDraft {
    /// Create a new empty draft
    pub fn new() -> Self {
        Self {
            draft_id: uuid::Uuid::new_v4().to_string(),
            customer: CustomerRef::default(),
            remarks: String::new(),
            delivery_date: None,
            entries: Vec::new(),
            lines: Vec::new(),
            totals: OrderTotals::default(),
        }
    }

    /// Whether the draft holds nothing worth submitting
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.lines.is_empty()
    }

    pub fn entry(&self, material_id: i64) -> Option<&SelectedEntry> {
        self.entries.iter().find(|e| e.id == material_id)
    }

    pub fn line(&self, serial: u32) -> Option<&BillLineItem> {
        self.lines.iter().find(|l| l.serial == serial)
    }
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self::new()
    }
}
