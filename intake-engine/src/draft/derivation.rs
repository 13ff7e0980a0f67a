//! Line derivation - bill lines generated from the selected materials

use super::money::line_amount;
use crate::core::{IntakeConfig, LineRegeneration};
use shared::order::{BillLineItem, SelectedEntry};

/// Rebuild the bill from the selection
///
/// One line per entry in selection order, serials 1..N, quantity 1 and fee
/// equal to the unit price. Under [`LineRegeneration::PreserveById`] a line
/// whose material is still selected keeps its quantity and fee. Hand-added
/// lines never survive.
pub fn derive_lines(
    entries: &[SelectedEntry],
    previous: &[BillLineItem],
    order_remarks: &str,
    config: &IntakeConfig,
) -> Vec<BillLineItem> {
    let remarks = if order_remarks.trim().is_empty() {
        config.default_line_remarks.as_str()
    } else {
        order_remarks
    };

    entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let (quantity, fee) = match config.line_regeneration {
                LineRegeneration::PreserveById => previous
                    .iter()
                    .find(|l| l.material_id == Some(entry.id))
                    .map(|l| (l.quantity, l.fee))
                    .unwrap_or((1, entry.unit_price)),
                LineRegeneration::Replace => (1, entry.unit_price),
            };
            BillLineItem {
                serial: idx as u32 + 1,
                material_id: Some(entry.id),
                label: entry.label.clone(),
                remarks: remarks.to_string(),
                quantity,
                fee,
                amount: line_amount(quantity, fee),
            }
        })
        .collect()
}
