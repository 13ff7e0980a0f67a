//! Intake error types

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Errors surfaced by the intake session
///
/// Draft edits never fail; only collaborator calls and the submission
/// guard produce these.
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("A submission is already in progress")]
    SubmissionInProgress,

    #[error("Submission failed: {0}")]
    Submission(AppError),

    #[error("Directory request failed: {0}")]
    Directory(AppError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<IntakeError> for AppError {
    fn from(err: IntakeError) -> Self {
        match err {
            IntakeError::SubmissionInProgress => AppError::new(ErrorCode::SubmissionInProgress),
            IntakeError::Submission(inner) => {
                AppError::with_message(ErrorCode::SubmissionFailed, inner.message.clone())
                    .with_detail("cause", inner.code.to_string())
            }
            IntakeError::Directory(inner) => inner,
            IntakeError::Config(msg) => AppError::config(msg),
        }
    }
}

pub type IntakeResult<T> = Result<T, IntakeError>;
