//! Shared types for the tailoring back office
//!
//! Common types used by the intake engine and the back-office client:
//! catalog and customer models, the job-order wire payloads, the intake
//! draft model, and the unified error types.

pub mod error;
pub mod models;
pub mod order;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use serde::{Deserialize, Serialize};
