//! Shared types for the job-order draft

use crate::models::Material;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ============================================================================
// Measurements
// ============================================================================

/// The six garment measurements recorded per material
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Measurements {
    pub thool: Decimal,
    pub kethet: Decimal,
    pub thool_kum: Decimal,
    pub ardh_f_kum: Decimal,
    pub jamba: Decimal,
    pub ragab: Decimal,
}

/// Addresses one field of [`Measurements`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementField {
    Thool,
    Kethet,
    ThoolKum,
    ArdhFKum,
    Jamba,
    Ragab,
}

impl MeasurementField {
    pub const ALL: [MeasurementField; 6] = [
        MeasurementField::Thool,
        MeasurementField::Kethet,
        MeasurementField::ThoolKum,
        MeasurementField::ArdhFKum,
        MeasurementField::Jamba,
        MeasurementField::Ragab,
    ];
}

impl Measurements {
    pub fn get(&self, field: MeasurementField) -> Decimal {
        match field {
            MeasurementField::Thool => self.thool,
            MeasurementField::Kethet => self.kethet,
            MeasurementField::ThoolKum => self.thool_kum,
            MeasurementField::ArdhFKum => self.ardh_f_kum,
            MeasurementField::Jamba => self.jamba,
            MeasurementField::Ragab => self.ragab,
        }
    }

    pub fn set(&mut self, field: MeasurementField, value: Decimal) {
        let slot = match field {
            MeasurementField::Thool => &mut self.thool,
            MeasurementField::Kethet => &mut self.kethet,
            MeasurementField::ThoolKum => &mut self.thool_kum,
            MeasurementField::ArdhFKum => &mut self.ardh_f_kum,
            MeasurementField::Jamba => &mut self.jamba,
            MeasurementField::Ragab => &mut self.ragab,
        };
        *slot = value;
    }
}

/// One of the four free-text notes kept per material
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NoteSlot {
    Note1,
    Note2,
    Note3,
    Note4,
}

/// Free-text notes attached to a selected material
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Notes {
    pub note1: String,
    pub note2: String,
    pub note3: String,
    pub note4: String,
}

impl Notes {
    pub fn set(&mut self, slot: NoteSlot, text: String) {
        match slot {
            NoteSlot::Note1 => self.note1 = text,
            NoteSlot::Note2 => self.note2 = text,
            NoteSlot::Note3 => self.note3 = text,
            NoteSlot::Note4 => self.note4 = text,
        }
    }
}

// ============================================================================
// Selection
// ============================================================================

/// A catalog material attached to the order, with its per-order measurements
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectedEntry {
    /// Material ID (shared with the catalog)
    pub id: i64,
    pub label: String,
    pub unit_price: Decimal,
    /// Catalog measurements, never edited
    pub baseline: Measurements,
    /// Measurements the clerk works on
    pub working: Measurements,
    /// Sticky: set by any measurement edit, cleared only by reset
    pub is_customized: bool,
    #[serde(default)]
    pub notes: Notes,
}

impl SelectedEntry {
    /// Fresh selection: working copy equals the catalog baseline
    pub fn from_material(material: &Material) -> Self {
        let baseline = material.measurements();
        Self {
            id: material.id,
            label: material.name.clone(),
            unit_price: material.price,
            baseline,
            working: baseline,
            is_customized: false,
            notes: Notes::default(),
        }
    }
}

// ============================================================================
// Bill
// ============================================================================

/// A priced row of the bill
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BillLineItem {
    /// 1-based position, contiguous
    pub serial: u32,
    /// Material the line was derived from (None for ad-hoc lines)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material_id: Option<i64>,
    pub label: String,
    pub remarks: String,
    pub quantity: u32,
    pub fee: Decimal,
    /// Always quantity × fee
    pub amount: Decimal,
}

// ============================================================================
// Payment
// ============================================================================

/// How the customer settles the order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Card,
    /// Split between cash and card
    #[serde(rename = "cash_card")]
    Split,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::Cash => write!(f, "cash"),
            PaymentMethod::Card => write!(f, "card"),
            PaymentMethod::Split => write!(f, "cash_card"),
        }
    }
}

/// Payment-method state
///
/// Single-tender variants carry nothing: their amounts follow the total.
/// `Split` holds the pair the clerk is working with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum Tender {
    #[default]
    Cash,
    Card,
    #[serde(rename = "cash_card")]
    Split { cash: Decimal, card: Decimal },
}

impl Tender {
    pub fn method(&self) -> PaymentMethod {
        match self {
            Tender::Cash => PaymentMethod::Cash,
            Tender::Card => PaymentMethod::Card,
            Tender::Split { .. } => PaymentMethod::Split,
        }
    }
}
