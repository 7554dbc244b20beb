//! Contract invocation parameters.
//!
//! An [`InvokeParam`] asks a node to run one method of a deployed contract.
//! It has two codecs with identical wire output:
//!
//! - the stream codec ([`invoke_io::Serializable`], [`StreamCodec`]), which
//!   stops at the first failing field and reports it as an
//!   [`InvokeParamError`];
//! - the zero-copy codec ([`invoke_io::ZeroCopyEncode`],
//!   [`invoke_io::ZeroCopyDecode`], [`ZeroCopyCodec`]), which decodes an
//!   [`InvokeParamRef`] borrowing the input buffer and reports malformed or
//!   truncated input through [`invoke_io::Decoded`].
//!
//! ```rust
//! use invoke_io::{Decoded, SerializableExt, ZeroCopyDecode};
//! use invoke_primitives::Address;
//! use invoke_smart_contract::{InvokeParam, InvokeParamRef};
//!
//! let param = InvokeParam::new(0, Address::zero(), "init", vec![0x01, 0x02]);
//! let bytes = param.to_array().unwrap();
//!
//! match InvokeParamRef::from_slice(&bytes) {
//!     Decoded::Done(view) => assert_eq!(view.method_str(), "init"),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

pub mod codec;
pub mod error;
pub mod invoke_param;
pub mod limits;
pub mod pre_exec;

pub use codec::{InvokeCodec, StreamCodec, ZeroCopyCodec};
pub use error::{ConfigError, Direction, InvokeField, InvokeParamError};
pub use invoke_param::{InvokeParam, InvokeParamRef};
pub use limits::CodecLimits;
pub use pre_exec::{pre_execute_bytes, ExecState, PreExecResult, PreExecutor};
