use crate::ZeroCopyError;

/// Outcome of a zero-copy decode.
///
/// `Irregular` and `Truncated` are distinct failure terminals. When both
/// conditions were seen, the decode is `Irregular`.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded<T> {
    /// Every field was read from well-formed, complete input.
    Done(T),
    /// Malformed input; whatever was read must be discarded.
    Irregular,
    /// The buffer ended before the value was complete.
    Truncated,
}

impl<T> Decoded<T> {
    /// Folds the two cursor flags into an outcome.
    #[inline]
    pub fn from_flags(value: T, irregular: bool, eof: bool) -> Self {
        if irregular {
            Self::Irregular
        } else if eof {
            Self::Truncated
        } else {
            Self::Done(value)
        }
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }

    #[inline]
    pub fn is_irregular(&self) -> bool {
        matches!(self, Self::Irregular)
    }

    #[inline]
    pub fn is_truncated(&self) -> bool {
        matches!(self, Self::Truncated)
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Decoded<U> {
        match self {
            Self::Done(value) => Decoded::Done(f(value)),
            Self::Irregular => Decoded::Irregular,
            Self::Truncated => Decoded::Truncated,
        }
    }

    pub fn ok(self) -> Option<T> {
        match self {
            Self::Done(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_result(self) -> Result<T, ZeroCopyError> {
        match self {
            Self::Done(value) => Ok(value),
            Self::Irregular => Err(ZeroCopyError::IrregularData),
            Self::Truncated => Err(ZeroCopyError::UnexpectedEof),
        }
    }
}

impl<T> From<Decoded<T>> for Result<T, ZeroCopyError> {
    fn from(decoded: Decoded<T>) -> Self {
        decoded.into_result()
    }
}
