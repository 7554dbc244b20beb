//! Invoke IO
//!
//! Binary wire primitives shared by the contract invocation codecs:
//!
//! - var-int / var-bytes encoding ([`varint`])
//! - a stream codec over `std::io` ([`BinaryWriter`], [`BinaryReader`],
//!   [`Serializable`]) that reports each failure as an [`IoError`]
//! - a zero-copy codec over in-memory buffers ([`ZeroCopySink`],
//!   [`ZeroCopySource`], [`ZeroCopyEncode`], [`ZeroCopyDecode`]) that reports
//!   failures through [`Decoded`]

mod binary_reader;
mod binary_writer;
mod decoded;
mod error;
mod primitives;
mod serializable;
pub mod varint;
pub mod zero_copy;

pub use binary_reader::BinaryReader;
pub use binary_writer::BinaryWriter;
pub use decoded::Decoded;
pub use error::{IoError, IoResult, ZeroCopyError};
pub use serializable::{Serializable, SerializableExt, ZeroCopyDecode, ZeroCopyEncode};
pub use zero_copy::{ZeroCopySink, ZeroCopySource};
