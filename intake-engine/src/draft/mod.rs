//! Order draft engine
//!
//! Stages, leaves first:
//!
//! ```text
//! registry → derivation → line_editor → totals → payment → assembler
//! ```
//!
//! `reducer` is the only caller of the stages and the only place that
//! matches on `IntakeCommand`.

pub mod assembler;
pub mod customer;
pub mod derivation;
pub mod line_editor;
pub mod money;
pub mod payment;
pub mod reducer;
pub mod registry;
pub mod totals;

pub use assembler::assemble;
pub use payment::{TenderEdit, reconcile_split};
pub use reducer::{apply, reduce};
