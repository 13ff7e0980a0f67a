//! Job Order Model
//!
//! Wire shapes exchanged with the job-order persistence service.

use super::customer::CustomerCreate;
use crate::order::{Measurements, PaymentMethod};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Job order lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum JobOrderStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Delivered,
}

/// Create job order payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobOrderCreate {
    /// Existing customer (mutually exclusive with `customer_data`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
    /// Inline customer to create together with the order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_data: Option<CustomerCreate>,
    pub status: JobOrderStatus,
    pub delivery_date: Option<DateTime<Utc>>,
    pub total_amount: Decimal,
    pub advance_amount: Decimal,
    pub balance_amount: Decimal,
    pub payment_method: PaymentMethod,
    pub cash_amount: Decimal,
    pub card_amount: Decimal,
    pub remarks: String,
    pub job_order_items: Vec<JobOrderItemCreate>,
    pub job_order_measurements: Vec<JobOrderMeasurementCreate>,
}

/// One billed line of a job order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobOrderItemCreate {
    /// Material ID
    pub material: i64,
    pub quantity: u32,
    pub fees: Decimal,
}

/// Measurements taken for one material of a job order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobOrderMeasurementCreate {
    /// Material ID
    pub material: i64,
    #[serde(flatten)]
    pub measurements: Measurements,
    pub note1: String,
    pub note2: String,
    pub note3: String,
    pub note4: String,
}

/// Job order as persisted by the back office
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobOrder {
    pub id: i64,
    #[serde(default)]
    pub job_order_number: String,
    #[serde(default)]
    pub status: JobOrderStatus,
    #[serde(default)]
    pub total_amount: Decimal,
    #[serde(default)]
    pub advance_amount: Decimal,
    #[serde(default)]
    pub balance_amount: Decimal,
    #[serde(default)]
    pub delivery_date: Option<DateTime<Utc>>,
}
