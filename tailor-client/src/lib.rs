//! Tailor Client - HTTP client for the tailoring back office
//!
//! Provides network-based calls to the customer directory, the material
//! catalog and the job-order service.

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
