//! # contract-invoke
//!
//! Wire format for contract invocation parameters: the payload a client
//! submits to ask a node to run one method of a deployed contract.
//!
//! ## Architecture
//!
//! - [`primitives`] - the contract [`Address`](primitives::Address)
//! - [`io`] - var-int primitives, the stream codec and the zero-copy codec
//! - [`smart_contract`] - [`InvokeParam`](smart_contract::InvokeParam), its
//!   borrowed view and the pre-execution hand-off
//!
//! ## Quick Start
//!
//! ```rust
//! use contract_invoke::prelude::*;
//!
//! let param = InvokeParam::new(0, Address::zero(), "init", vec![0x01, 0x02]);
//!
//! let stream = StreamCodec::default().encode(&param).unwrap();
//! let zero_copy = ZeroCopyCodec::default().encode(&param).unwrap();
//! assert_eq!(stream, zero_copy);
//!
//! let view = ZeroCopyCodec::default().decode_view(&zero_copy).into_result().unwrap();
//! assert_eq!(view.args, &[0x01, 0x02]);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub use invoke_io as io;
pub use invoke_primitives as primitives;
pub use invoke_smart_contract as smart_contract;

/// Common imports for working with invocation parameters
pub mod prelude {
    pub use crate::io::{
        BinaryReader, BinaryWriter, Decoded, IoError, Serializable, SerializableExt,
        ZeroCopyDecode, ZeroCopyEncode, ZeroCopyError, ZeroCopySink, ZeroCopySource,
    };
    pub use crate::primitives::Address;
    pub use crate::smart_contract::{
        pre_execute_bytes, CodecLimits, Direction, ExecState, InvokeCodec, InvokeField,
        InvokeParam, InvokeParamError, InvokeParamRef, PreExecResult, PreExecutor, StreamCodec,
        ZeroCopyCodec,
    };
}

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
