//! Unified error system for the tailoring back office
//!
//! - [`ErrorCode`]: Standardized error codes
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Customer errors
//! - 6xxx: Intake draft errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::validation("Missing phone number")
//!     .with_detail("field", "phone");
//! assert_eq!(err.code, ErrorCode::ValidationFailed);
//! assert_eq!(err.code.to_string(), "E0002");
//! ```

mod codes;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
