use thiserror::Error;

/// Errors raised while decoding or validating quiz data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModelError {
    #[error("invalid player choice: {0} (expected 1 or 2)")]
    InvalidChoice(u8),

    #[error("invalid quiz length: {0}")]
    InvalidQuizLength(u32),
}
