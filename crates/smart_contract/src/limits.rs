//! Length limits applied while decoding invocation parameters.

use serde::Deserialize;

use crate::error::ConfigError;

/// Largest var-bytes payload a node accepts by default.
pub const MAX_VAR_BYTES: u64 = 0x0100_0000;

/// Longest method name accepted under [`CodecLimits::strict`].
pub const MAX_METHOD_LEN: u64 = 1024;

/// Upper bounds for the length-prefixed fields.
///
/// The default is unbounded: every encodable value decodes. Nodes that accept
/// parameters from untrusted peers should use [`CodecLimits::strict`] or load
/// limits from configuration:
///
/// ```toml
/// max_method_len = 64
/// max_args_len = 65536
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecLimits {
    /// Maximum length of the method name in bytes.
    pub max_method_len: u64,

    /// Maximum length of the argument blob in bytes.
    pub max_args_len: u64,
}

impl Default for CodecLimits {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl CodecLimits {
    pub const fn unbounded() -> Self {
        Self {
            max_method_len: u64::MAX,
            max_args_len: u64::MAX,
        }
    }

    pub const fn strict() -> Self {
        Self {
            max_method_len: MAX_METHOD_LEN,
            max_args_len: MAX_VAR_BYTES,
        }
    }

    /// Parses limits from a TOML fragment. Missing keys stay unbounded.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }
}
