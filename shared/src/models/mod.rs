//! Data models
//!
//! Wire shapes of the tailoring back office (Django REST framework), shared
//! by the intake engine and the HTTP client. All IDs are `i64`; decimals
//! are accepted either as JSON strings or numbers.

pub mod customer;
pub mod job_order;
pub mod material;

// Re-exports
pub use customer::*;
pub use job_order::*;
pub use material::*;
