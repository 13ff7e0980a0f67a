//! Draft assembler - the job-order payload sent to the back office
//!
//! Pure mapping, no validation: rejections come back from the job-order
//! service.

use crate::core::IntakeConfig;
use chrono::{NaiveDate, NaiveTime, Utc};
use shared::models::{
    CustomerCreate, JobOrderCreate, JobOrderItemCreate, JobOrderMeasurementCreate, JobOrderStatus,
};
use shared::order::{CustomerRef, OrderDraft};

pub fn assemble(draft: &OrderDraft, config: &IntakeConfig) -> JobOrderCreate {
    let (customer_id, customer_data) = match &draft.customer {
        CustomerRef::Existing(customer) => (Some(customer.id), None),
        CustomerRef::Inline(inline) => (
            None,
            Some(CustomerCreate::new(
                inline.customer_no.clone(),
                inline.name.clone(),
                inline.phone.clone(),
                inline.opening_balance,
            )),
        ),
    };

    let totals = &draft.totals;

    JobOrderCreate {
        customer_id,
        customer_data,
        status: JobOrderStatus::Pending,
        delivery_date: draft.delivery_date.map(midnight_utc),
        total_amount: totals.total,
        advance_amount: totals.advance,
        balance_amount: totals.balance,
        payment_method: totals.tender.method(),
        cash_amount: totals.cash_amount(),
        card_amount: totals.card_amount(),
        remarks: draft.remarks.clone(),
        job_order_items: draft
            .lines
            .iter()
            .map(|line| JobOrderItemCreate {
                material: line.material_id.unwrap_or(config.fallback_material_id),
                quantity: line.quantity,
                fees: line.fee,
            })
            .collect(),
        job_order_measurements: draft
            .entries
            .iter()
            .map(|entry| JobOrderMeasurementCreate {
                material: entry.id,
                measurements: entry.working,
                note1: entry.notes.note1.clone(),
                note2: entry.notes.note2.clone(),
                note3: entry.notes.note3.clone(),
                note4: entry.notes.note4.clone(),
            })
            .collect(),
    }
}

fn midnight_utc(date: NaiveDate) -> chrono::DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}
