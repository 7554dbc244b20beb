//! Error types for the smart contract crate.

use std::fmt;

use invoke_io::IoError;
use thiserror::Error;

/// Field of an invocation parameter, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvokeField {
    Version,
    Address,
    Method,
    Args,
}

impl fmt::Display for InvokeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Version => "version",
            Self::Address => "address",
            Self::Method => "method",
            Self::Args => "args",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Serialize,
    Deserialize,
}

/// A stream codec failure, tagged with the field and direction that failed.
///
/// The underlying [`IoError`] is exposed through `source()`.
#[derive(Debug, Error)]
#[error("{tag}")]
pub struct InvokeParamError {
    field: InvokeField,
    direction: Direction,
    tag: &'static str,
    #[source]
    source: IoError,
}

impl InvokeParamError {
    pub fn new(field: InvokeField, direction: Direction, source: IoError) -> Self {
        Self {
            field,
            direction,
            tag: tag(field, direction),
            source,
        }
    }

    pub fn serialize(field: InvokeField, source: IoError) -> Self {
        Self::new(field, Direction::Serialize, source)
    }

    pub fn deserialize(field: InvokeField, source: IoError) -> Self {
        Self::new(field, Direction::Deserialize, source)
    }

    pub fn field(&self) -> InvokeField {
        self.field
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Static, human-readable description of the failed step.
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn io_error(&self) -> &IoError {
        &self.source
    }

    pub fn into_io_error(self) -> IoError {
        self.source
    }
}

fn tag(field: InvokeField, direction: Direction) -> &'static str {
    use Direction::*;
    use InvokeField::*;

    match (field, direction) {
        (Version, Serialize) => "[InvokeParam] Version serialize error",
        (Version, Deserialize) => "[InvokeParam] Version deserialize error",
        (Address, Serialize) => "[InvokeParam] Address serialize error",
        (Address, Deserialize) => "[InvokeParam] Address deserialize error",
        (Method, Serialize) => "[InvokeParam] Method serialize error",
        (Method, Deserialize) => "[InvokeParam] Method deserialize error",
        (Args, Serialize) => "[InvokeParam] Args serialize error",
        (Args, Deserialize) => "[InvokeParam] Args deserialize error",
    }
}

/// Invalid codec configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid codec limits: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_carries_tag_and_source() {
        let err = InvokeParamError::deserialize(InvokeField::Method, IoError::UnexpectedEof);
        assert_eq!(err.field(), InvokeField::Method);
        assert_eq!(err.direction(), Direction::Deserialize);
        assert_eq!(err.to_string(), "[InvokeParam] Method deserialize error");
        assert!(err.io_error().is_eof());
        assert_eq!(
            err.source().map(|s| s.to_string()),
            Some("Unexpected end of input".to_string())
        );
        assert!(matches!(err.into_io_error(), IoError::UnexpectedEof));
    }

    #[test]
    fn test_every_tag_names_its_field() {
        for field in [
            InvokeField::Version,
            InvokeField::Address,
            InvokeField::Method,
            InvokeField::Args,
        ] {
            for direction in [Direction::Serialize, Direction::Deserialize] {
                let tag = tag(field, direction).to_lowercase();
                assert!(tag.contains(&field.to_string()));
                assert!(tag.contains(match direction {
                    Direction::Serialize => " serialize ",
                    Direction::Deserialize => " deserialize ",
                }));
            }
        }
    }
}
