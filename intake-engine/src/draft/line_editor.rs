//! Line editor - hand edits of the bill
//!
//! Each operation keeps `amount = quantity × fee` on the touched line and
//! serials contiguous. Unknown serials are ignored.

use super::money::line_amount;
use crate::core::IntakeConfig;
use rust_decimal::Decimal;
use shared::order::BillLineItem;

pub fn set_quantity(lines: &mut [BillLineItem], serial: u32, quantity: u32) -> bool {
    match lines.iter_mut().find(|l| l.serial == serial) {
        Some(line) => {
            line.quantity = quantity;
            line.amount = line_amount(line.quantity, line.fee);
            true
        }
        None => false,
    }
}

pub fn set_fee(lines: &mut [BillLineItem], serial: u32, fee: Decimal) -> bool {
    match lines.iter_mut().find(|l| l.serial == serial) {
        Some(line) => {
            line.fee = fee;
            line.amount = line_amount(line.quantity, line.fee);
            true
        }
        None => false,
    }
}

/// Append a placeholder line not tied to any material
pub fn add_ad_hoc_line(lines: &mut Vec<BillLineItem>, config: &IntakeConfig) {
    lines.push(BillLineItem {
        serial: lines.len() as u32 + 1,
        material_id: None,
        label: config.ad_hoc_line_label.clone(),
        remarks: config.ad_hoc_line_remarks.clone(),
        quantity: 1,
        fee: Decimal::ZERO,
        amount: Decimal::ZERO,
    });
}

/// Remove a line and renumber the rest, keeping their order
pub fn remove_line(lines: &mut Vec<BillLineItem>, serial: u32) -> bool {
    let before = lines.len();
    lines.retain(|l| l.serial != serial);
    if lines.len() == before {
        return false;
    }
    renumber(lines);
    true
}

pub fn clear_all(lines: &mut Vec<BillLineItem>) {
    lines.clear();
}

fn renumber(lines: &mut [BillLineItem]) {
    for (idx, line) in lines.iter_mut().enumerate() {
        line.serial = idx as u32 + 1;
    }
}
