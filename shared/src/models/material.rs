//! Material Model (catalog entry)

use crate::order::Measurements;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Material entity as returned by the catalog directory
///
/// Carries the standard garment measurements the shop uses as the
/// starting point for every order that picks this material.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Material {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub thool: Decimal,
    #[serde(default)]
    pub kethet: Decimal,
    #[serde(default)]
    pub thool_kum: Decimal,
    #[serde(default)]
    pub ardh_f_kum: Decimal,
    #[serde(default)]
    pub jamba: Decimal,
    #[serde(default)]
    pub ragab: Decimal,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl Material {
    /// Baseline measurement set of this material
    pub fn measurements(&self) -> Measurements {
        Measurements {
            thool: self.thool,
            kethet: self.kethet,
            thool_kum: self.thool_kum,
            ardh_f_kum: self.ardh_f_kum,
            jamba: self.jamba,
            ragab: self.ragab,
        }
    }
}

fn default_active() -> bool {
    true
}
