use thiserror::Error;

/// Failure of a single stream read or write.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("Unexpected end of input")]
    UnexpectedEof,

    #[error("Non-canonical var-int: tag {tag:#04x} carries {value}")]
    NonCanonicalVarInt { tag: u8, value: u64 },

    #[error("Length {len} exceeds maximum {max}")]
    LengthExceeded { len: u64, max: u64 },

    #[error(transparent)]
    Io(std::io::Error),
}

impl IoError {
    /// Returns true for failures caused by running out of input.
    pub fn is_eof(&self) -> bool {
        matches!(self, Self::UnexpectedEof)
    }
}

impl From<std::io::Error> for IoError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::UnexpectedEof => Self::UnexpectedEof,
            _ => Self::Io(err),
        }
    }
}

pub type IoResult<T> = Result<T, IoError>;

/// Terminal failure of a zero-copy decode.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ZeroCopyError {
    /// A length prefix or var-int was structurally invalid.
    #[error("irregular data")]
    IrregularData,

    /// The buffer ended before the value was complete.
    #[error("unexpected end of data")]
    UnexpectedEof,
}
