//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by submission sinks.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SubmissionError {
    #[error("submission is not configured")]
    Disabled,
    #[error("submission endpoint responded with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
