//! Core configuration

pub mod config;

pub use config::{ClampPolicy, IntakeConfig, LineRegeneration};
