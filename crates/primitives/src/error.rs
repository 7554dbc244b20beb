use thiserror::Error;

/// Errors raised while constructing or parsing primitive values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PrimitiveError {
    #[error("Invalid format: {message}")]
    InvalidFormat { message: String },

    #[error("Invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

impl PrimitiveError {
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }
}

pub type PrimitiveResult<T> = Result<T, PrimitiveError>;
