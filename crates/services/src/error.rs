//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::AnswerError;

/// Errors emitted by `QuizApi` implementations and the quiz controller.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizApiError {
    #[error("quiz server could not start a quiz (status {0})")]
    StartFailed(reqwest::StatusCode),
    #[error("quiz server rejected the answer (status {0})")]
    Rejected(reqwest::StatusCode),
    #[error(transparent)]
    Answer(#[from] AnswerError),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
