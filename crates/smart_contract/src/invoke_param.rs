//! Contract invocation parameters.
//!
//! Wire layout, shared by the stream and zero-copy codecs:
//!
//! ```text
//! version   u8
//! address   20 bytes
//! method    var-bytes (text)
//! args      var-bytes (opaque)
//! ```

use std::borrow::Cow;
use std::io::{Read, Write};

use invoke_io::varint::var_bytes_size;
use invoke_io::{
    BinaryReader, BinaryWriter, Decoded, Serializable, ZeroCopyDecode, ZeroCopyEncode,
    ZeroCopySink, ZeroCopySource,
};
use invoke_primitives::Address;
use tracing::{debug, warn};

use crate::error::{InvokeField, InvokeParamError};
use crate::limits::CodecLimits;

/// A request to run `method` of the contract at `address` with `args`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InvokeParam {
    /// Format revision of the record. Not range-checked.
    pub version: u8,

    /// Address of the target contract.
    pub address: Address,

    /// Entry point name.
    pub method: String,

    /// Encoded method arguments. Not interpreted here.
    pub args: Vec<u8>,
}

impl InvokeParam {
    /// Builds a record from its four fields.
    pub fn new(version: u8, address: Address, method: impl Into<String>, args: Vec<u8>) -> Self {
        Self {
            version,
            address,
            method: method.into(),
            args,
        }
    }

    /// Borrows this record as a zero-copy view.
    pub fn as_view(&self) -> InvokeParamRef<'_> {
        InvokeParamRef {
            version: self.version,
            address: self.address,
            method: self.method.as_bytes(),
            args: &self.args,
        }
    }

    /// Stream decode that rejects method or args longer than `limits` allow.
    pub fn deserialize_with_limits<R: Read>(
        reader: &mut BinaryReader<R>,
        limits: &CodecLimits,
    ) -> Result<Self, InvokeParamError> {
        let version = reader
            .read_u8()
            .map_err(|e| InvokeParamError::deserialize(InvokeField::Version, e))?;

        let address = Address::deserialize(reader)
            .map_err(|e| InvokeParamError::deserialize(InvokeField::Address, e))?;

        let method = reader
            .read_var_bytes(limits.max_method_len)
            .map_err(|e| InvokeParamError::deserialize(InvokeField::Method, e))?;

        let args = reader
            .read_var_bytes(limits.max_args_len)
            .map_err(|e| InvokeParamError::deserialize(InvokeField::Args, e))?;

        Ok(Self {
            version,
            address,
            method: method_text(method),
            args,
        })
    }
}

/// Converts method bytes to text, replacing invalid UTF-8 sequences.
fn method_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            warn!(
                len = err.as_bytes().len(),
                "method name is not valid UTF-8; decoding lossily"
            );
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    }
}

impl Serializable for InvokeParam {
    type Error = InvokeParamError;

    fn size(&self) -> usize {
        self.as_view().size()
    }

    fn serialize<W: Write>(&self, writer: &mut BinaryWriter<W>) -> Result<(), InvokeParamError> {
        writer
            .write_u8(self.version)
            .map_err(|e| InvokeParamError::serialize(InvokeField::Version, e))?;

        self.address
            .serialize(writer)
            .map_err(|e| InvokeParamError::serialize(InvokeField::Address, e))?;

        writer
            .write_var_bytes(self.method.as_bytes())
            .map_err(|e| InvokeParamError::serialize(InvokeField::Method, e))?;

        writer
            .write_var_bytes(&self.args)
            .map_err(|e| InvokeParamError::serialize(InvokeField::Args, e))?;

        Ok(())
    }

    fn deserialize<R: Read>(reader: &mut BinaryReader<R>) -> Result<Self, InvokeParamError> {
        Self::deserialize_with_limits(reader, &CodecLimits::default())
    }
}

impl ZeroCopyEncode for InvokeParam {
    fn encode_into(&self, sink: &mut ZeroCopySink) {
        self.as_view().encode_into(sink);
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.as_view().to_bytes()
    }
}

/// An invocation parameter decoded in place.
///
/// `method` and `args` are views into the buffer the record was decoded from.
/// The record cannot outlive that buffer, and the buffer cannot be modified
/// while the record exists. Use [`into_owned`](Self::into_owned) to copy the
/// data out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvokeParamRef<'a> {
    /// Format revision of the record. Not range-checked.
    pub version: u8,

    /// Address of the target contract.
    pub address: Address,

    /// Raw method name bytes, not validated as UTF-8.
    pub method: &'a [u8],

    /// Encoded method arguments, borrowed from the source buffer.
    pub args: &'a [u8],
}

impl<'a> InvokeParamRef<'a> {
    /// Exact encoded length.
    pub fn size(&self) -> usize {
        1 + Address::LENGTH + var_bytes_size(self.method) + var_bytes_size(self.args)
    }

    /// Method name as text; invalid UTF-8 sequences are replaced.
    pub fn method_str(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.method)
    }

    /// Copies the view into an owned record.
    pub fn into_owned(self) -> InvokeParam {
        InvokeParam {
            version: self.version,
            address: self.address,
            method: method_text(self.method.to_vec()),
            args: self.args.to_vec(),
        }
    }

    /// Zero-copy decode that treats method or args longer than `limits`
    /// allow as irregular.
    pub fn decode_with_limits(source: &mut ZeroCopySource<'a>, limits: &CodecLimits) -> Decoded<Self> {
        let start = source.position();

        let (version, mut eof) = source.next_byte();

        let (address, address_eof) = source.next_address();
        eof |= address_eof;

        let (method, _, irregular, method_eof) = source.next_var_bytes_max(limits.max_method_len);
        eof |= method_eof;
        if irregular {
            debug!(start, position = source.position(), "irregular method in invoke param");
            return Decoded::Irregular;
        }

        let (args, _, irregular, args_eof) = source.next_var_bytes_max(limits.max_args_len);
        eof |= args_eof;
        if irregular {
            debug!(start, position = source.position(), "irregular args in invoke param");
            return Decoded::Irregular;
        }

        if eof {
            debug!(start, len = source.len(), "truncated invoke param");
            return Decoded::Truncated;
        }

        Decoded::Done(Self {
            version,
            address,
            method,
            args,
        })
    }
}

impl ZeroCopyEncode for InvokeParamRef<'_> {
    fn encode_into(&self, sink: &mut ZeroCopySink) {
        sink.write_u8(self.version);
        sink.write_address(&self.address);
        sink.write_var_bytes(self.method);
        sink.write_var_bytes(self.args);
    }

    fn to_bytes(&self) -> Vec<u8> {
        let mut sink = ZeroCopySink::with_capacity(self.size());
        self.encode_into(&mut sink);
        sink.into_vec()
    }
}

impl<'a> ZeroCopyDecode<'a> for InvokeParamRef<'a> {
    fn decode_from(source: &mut ZeroCopySource<'a>) -> Decoded<Self> {
        Self::decode_with_limits(source, &CodecLimits::default())
    }
}

impl<'a> From<&'a InvokeParam> for InvokeParamRef<'a> {
    fn from(param: &'a InvokeParam) -> Self {
        param.as_view()
    }
}

impl From<InvokeParamRef<'_>> for InvokeParam {
    fn from(view: InvokeParamRef<'_>) -> Self {
        view.into_owned()
    }
}
