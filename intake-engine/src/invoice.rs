//! Invoice hand-off
//!
//! The finished figures a print formatter needs. Nothing here is
//! recomputed; the draft is trusted as-is.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::JobOrder;
use shared::order::{BillLineItem, CustomerRef, OrderDraft, PaymentMethod};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvoiceCustomer {
    /// Back-office id, None for a customer created with the order
    pub id: Option<i64>,
    pub customer_no: String,
    pub name: String,
    pub phone: String,
    pub balance: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvoiceTotals {
    pub total: Decimal,
    pub advance: Decimal,
    pub balance: Decimal,
    pub payment_method: PaymentMethod,
    pub cash_amount: Decimal,
    pub card_amount: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvoiceData {
    /// Job order number once the order is persisted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
    pub customer: InvoiceCustomer,
    pub lines: Vec<BillLineItem>,
    pub totals: InvoiceTotals,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<NaiveDate>,
    pub remarks: String,
}

impl InvoiceData {
    pub fn from_draft(draft: &OrderDraft) -> Self {
        let customer = match &draft.customer {
            CustomerRef::Existing(c) => InvoiceCustomer {
                id: Some(c.id),
                customer_no: c.customer_id.clone(),
                name: c.name.clone(),
                phone: c.phone.clone(),
                balance: c.balance,
            },
            CustomerRef::Inline(c) => InvoiceCustomer {
                id: None,
                customer_no: c.customer_no.clone(),
                name: c.name.clone(),
                phone: c.phone.clone(),
                balance: c.opening_balance,
            },
        };
        let t = &draft.totals;

        Self {
            order_number: None,
            customer,
            lines: draft.lines.clone(),
            totals: InvoiceTotals {
                total: t.total,
                advance: t.advance,
                balance: t.balance,
                payment_method: t.tender.method(),
                cash_amount: t.cash_amount(),
                card_amount: t.card_amount(),
            },
            delivery_date: draft.delivery_date,
            remarks: draft.remarks.clone(),
        }
    }

    /// Stamp the persisted order number
    pub fn with_order(mut self, order: &JobOrder) -> Self {
        if !order.job_order_number.is_empty() {
            self.order_number = Some(order.job_order_number.clone());
        }
        self
    }
}
