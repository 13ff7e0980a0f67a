//! Job-order intake types
//!
//! This module provides the data model of the intake desk:
//! - Types: measurements, selected materials, bill lines, payment tender
//! - Draft: the aggregate state of one order being composed
//! - Commands: discrete clerk edits folded into the draft by the reducer

pub mod command;
pub mod draft;
pub mod types;

// Re-exports
pub use command::IntakeCommand;
pub use draft::{CustomerField, CustomerRef, InlineCustomer, OrderDraft, OrderTotals};
pub use types::*;
