//! Selection registry - the materials attached to the order
//!
//! Operations are total: an unknown id leaves the registry untouched. Each
//! one reports whether it changed the selected set (not the measurements),
//! which is what decides if the bill must be re-derived.

use shared::models::Material;
use shared::order::{MeasurementField, NoteSlot, SelectedEntry};
use rust_decimal::Decimal;
use tracing::debug;

/// Append `material` unless it is already selected
///
/// Returns true when the set changed.
pub fn select(entries: &mut Vec<SelectedEntry>, material: &Material) -> bool {
    if entries.iter().any(|e| e.id == material.id) {
        debug!(material_id = material.id, "Material already selected");
        return false;
    }
    entries.push(SelectedEntry::from_material(material));
    true
}

/// Drop the entry with `material_id`
///
/// Returns true when the set changed.
pub fn remove(entries: &mut Vec<SelectedEntry>, material_id: i64) -> bool {
    let before = entries.len();
    entries.retain(|e| e.id != material_id);
    entries.len() != before
}

/// Write one working measurement and mark the entry customized
///
/// The flag is set even when the value equals the baseline; only
/// [`reset_measurements`] clears it.
pub fn edit_measurement(
    entries: &mut [SelectedEntry],
    material_id: i64,
    field: MeasurementField,
    value: Decimal,
) -> bool {
    match entries.iter_mut().find(|e| e.id == material_id) {
        Some(entry) => {
            entry.working.set(field, value);
            entry.is_customized = true;
            true
        }
        None => false,
    }
}

/// Restore the working set from the baseline and clear the flag
pub fn reset_measurements(entries: &mut [SelectedEntry], material_id: i64) -> bool {
    match entries.iter_mut().find(|e| e.id == material_id) {
        Some(entry) => {
            entry.working = entry.baseline;
            entry.is_customized = false;
            true
        }
        None => false,
    }
}

/// Write one of the four notes; the customization flag is left alone
pub fn edit_note(entries: &mut [SelectedEntry], material_id: i64, slot: NoteSlot, text: &str) -> bool {
    match entries.iter_mut().find(|e| e.id == material_id) {
        Some(entry) => {
            entry.notes.set(slot, text.to_string());
            true
        }
        None => false,
    }
}

pub fn clear_all(entries: &mut Vec<SelectedEntry>) {
    entries.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn material(id: i64, price: i64) -> Material {
        Material {
            id,
            name: format!("Material {}", id),
            price: Decimal::new(price, 0),
            thool: Decimal::new(58, 0),
            kethet: Decimal::new(21, 0),
            thool_kum: Decimal::new(23, 0),
            ardh_f_kum: Decimal::new(9, 0),
            jamba: Decimal::new(11, 0),
            ragab: Decimal::new(15, 0),
            is_active: true,
        }
    }

    #[test]
    fn test_select_dedups_by_id() {
        let mut entries = Vec::new();
        assert!(select(&mut entries, &material(1, 100)));
        assert!(select(&mut entries, &material(2, 50)));
        assert!(!select(&mut entries, &material(1, 999)));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].unit_price, Decimal::new(100, 0));
    }

    #[test]
    fn test_select_keeps_order() {
        let mut entries = Vec::new();
        for id in [3, 1, 2] {
            select(&mut entries, &material(id, 10));
        }
        let ids: Vec<i64> = entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut entries = Vec::new();
        select(&mut entries, &material(1, 100));
        assert!(!remove(&mut entries, 42));
        assert!(remove(&mut entries, 1));
        assert!(entries.is_empty());
    }

    #[test]
    fn test_edit_measurement_sets_sticky_flag() {
        let mut entries = Vec::new();
        select(&mut entries, &material(1, 100));

        // Same value as baseline still counts as a customization
        assert!(edit_measurement(&mut entries, 1, MeasurementField::Thool, Decimal::new(58, 0)));
        assert!(entries[0].is_customized);

        edit_measurement(&mut entries, 1, MeasurementField::Jamba, Decimal::new(12, 0));
        assert_eq!(entries[0].working.jamba, Decimal::new(12, 0));
        assert_eq!(entries[0].baseline.jamba, Decimal::new(11, 0));
    }

    #[test]
    fn test_reset_restores_baseline() {
        let mut entries = Vec::new();
        select(&mut entries, &material(1, 100));
        edit_measurement(&mut entries, 1, MeasurementField::Ragab, Decimal::new(17, 0));
        edit_measurement(&mut entries, 1, MeasurementField::Kethet, Decimal::new(22, 0));

        assert!(reset_measurements(&mut entries, 1));
        assert_eq!(entries[0].working, entries[0].baseline);
        assert!(!entries[0].is_customized);
    }

    #[test]
    fn test_edit_note_does_not_customize() {
        let mut entries = Vec::new();
        select(&mut entries, &material(1, 100));
        assert!(edit_note(&mut entries, 1, NoteSlot::Note2, "double stitch"));
        assert_eq!(entries[0].notes.note2, "double stitch");
        assert!(!entries[0].is_customized);
        assert!(!edit_note(&mut entries, 9, NoteSlot::Note1, "x"));
    }
}
