//! Customer Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Customer entity as returned by the customer directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    pub id: i64,
    /// Shop-facing customer number (assigned by the back office)
    #[serde(default)]
    pub customer_id: String,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub balance: Decimal,
    #[serde(default)]
    pub points: i64,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

/// Create customer payload
///
/// Sent either on its own to the customer directory, or embedded in a job
/// order as `customer_data` when no existing customer was picked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerCreate {
    pub customer_id: String,
    pub name: String,
    pub phone: String,
    pub balance: Decimal,
    pub points: i64,
    pub is_active: bool,
}

impl CustomerCreate {
    /// New customer with zero loyalty points, active
    pub fn new(
        customer_id: impl Into<String>,
        name: impl Into<String>,
        phone: impl Into<String>,
        balance: Decimal,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            name: name.into(),
            phone: phone.into(),
            balance,
            points: 0,
            is_active: true,
        }
    }
}

fn default_active() -> bool {
    true
}
