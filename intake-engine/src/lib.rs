//! Intake Engine - job-order composition and billing reconciliation
//!
//! # Module layout
//!
//! ```text
//! intake-engine/src/
//! ├── core/      # configuration
//! ├── draft/     # selection, bill lines, totals, payment, payload, reducer
//! ├── session    # draft ownership and submission guard
//! ├── ports      # customer / catalog / job-order collaborators
//! ├── invoice    # print hand-off
//! ├── replay     # command scripts
//! └── utils/     # logging
//! ```

pub mod core;
pub mod draft;
pub mod error;
pub mod invoice;
pub mod ports;
pub mod replay;
pub mod session;
pub mod utils;

pub use core::{ClampPolicy, IntakeConfig, LineRegeneration};
pub use draft::{apply, assemble, reduce};
pub use error::{IntakeError, IntakeResult};
pub use invoice::InvoiceData;
pub use ports::{CatalogDirectory, CustomerDirectory, OrderSink};
pub use session::{IntakeSession, SubmissionReceipt};

pub use utils::logger::{init_logger, init_logger_with_file};
