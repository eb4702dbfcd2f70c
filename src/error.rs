use thiserror::Error;

/// Application-wide error type, consolidating all possible errors into a single enum.
#[derive(Debug, Error, Clone)]
pub enum AppError {
    /// Represents data validation errors (e.g., mismatched answer/question
    /// lengths, an answer index outside 0..=3, an invalid catalog record).
    /// These indicate a caller bug, not a recoverable runtime condition.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents a failure while generating a chatbot response. The
    /// conversation session catches this and substitutes a fixed apology;
    /// it is never surfaced to the presentation layer.
    #[error("Response generation failed: {0}")]
    Generator(String),

    /// Represents unexpected internal errors that indicate a bug.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("JSON error: {}", err))
    }
}

impl From<uuid::Error> for AppError {
    fn from(err: uuid::Error) -> Self {
        AppError::Validation(format!("UUID error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}

impl From<chrono::ParseError> for AppError {
    fn from(err: chrono::ParseError) -> Self {
        AppError::Validation(format!("Date parse error: {}", err))
    }
}
