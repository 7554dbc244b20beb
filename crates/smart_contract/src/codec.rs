//! The two codecs behind one interface.
//!
//! [`StreamCodec`] and [`ZeroCopyCodec`] encode the same wire format. Code
//! that must stay agnostic of the codec (property tests, benchmarks, tooling)
//! goes through [`InvokeCodec`].

use invoke_io::{BinaryReader, BinaryWriter, Decoded, Serializable, ZeroCopySink, ZeroCopySource};
use invoke_io::{ZeroCopyEncode, ZeroCopyError};

use crate::error::InvokeParamError;
use crate::invoke_param::{InvokeParam, InvokeParamRef};
use crate::limits::CodecLimits;

/// Encodes and decodes owned [`InvokeParam`] records.
pub trait InvokeCodec {
    type Error: std::error::Error + Send + Sync + 'static;

    fn encode(&self, param: &InvokeParam) -> Result<Vec<u8>, Self::Error>;

    /// Decodes one record from the front of `bytes`. Trailing bytes are ignored.
    fn decode(&self, bytes: &[u8]) -> Result<InvokeParam, Self::Error>;
}

/// `std::io` based codec with field-tagged errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamCodec {
    pub limits: CodecLimits,
}

impl StreamCodec {
    pub fn new(limits: CodecLimits) -> Self {
        Self { limits }
    }
}

impl InvokeCodec for StreamCodec {
    type Error = InvokeParamError;

    fn encode(&self, param: &InvokeParam) -> Result<Vec<u8>, InvokeParamError> {
        let mut writer = BinaryWriter::new(Vec::with_capacity(param.size()));
        param.serialize(&mut writer)?;
        Ok(writer.into_inner())
    }

    fn decode(&self, bytes: &[u8]) -> Result<InvokeParam, InvokeParamError> {
        InvokeParam::deserialize_with_limits(&mut BinaryReader::new(bytes), &self.limits)
    }
}

/// Buffer based codec. Decoding goes through a borrowed view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZeroCopyCodec {
    pub limits: CodecLimits,
}

impl ZeroCopyCodec {
    pub fn new(limits: CodecLimits) -> Self {
        Self { limits }
    }

    pub fn encode_into(&self, param: &InvokeParam, sink: &mut ZeroCopySink) {
        param.encode_into(sink);
    }

    /// Decodes a view borrowing `bytes`, without copying `method` or `args`.
    pub fn decode_view<'a>(&self, bytes: &'a [u8]) -> Decoded<InvokeParamRef<'a>> {
        InvokeParamRef::decode_with_limits(&mut ZeroCopySource::new(bytes), &self.limits)
    }
}

impl InvokeCodec for ZeroCopyCodec {
    type Error = ZeroCopyError;

    fn encode(&self, param: &InvokeParam) -> Result<Vec<u8>, ZeroCopyError> {
        Ok(param.to_bytes())
    }

    fn decode(&self, bytes: &[u8]) -> Result<InvokeParam, ZeroCopyError> {
        self.decode_view(bytes)
            .map(InvokeParamRef::into_owned)
            .into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use invoke_primitives::Address;

    fn sample() -> InvokeParam {
        InvokeParam::new(
            3,
            Address::from_script(b"token"),
            "transfer",
            (0u8..=255).collect(),
        )
    }

    fn roundtrip<C: InvokeCodec>(codec: &C) -> Vec<u8> {
        let param = sample();
        let bytes = codec.encode(&param).unwrap();
        assert_eq!(codec.decode(&bytes).unwrap(), param);
        bytes
    }

    #[test]
    fn test_codecs_agree_on_bytes() {
        let stream = roundtrip(&StreamCodec::default());
        let zero_copy = roundtrip(&ZeroCopyCodec::default());
        assert_eq!(stream, zero_copy);
        // 256-byte args need a 3-byte length prefix
        assert_eq!(stream.len(), 1 + 20 + 1 + 8 + 3 + 256);
    }

    #[test]
    fn test_codecs_share_limits() {
        let bytes = ZeroCopyCodec::default().encode(&sample()).unwrap();
        let strict = CodecLimits {
            max_args_len: 255,
            ..CodecLimits::default()
        };
        assert!(StreamCodec::new(strict).decode(&bytes).is_err());
        assert_eq!(
            ZeroCopyCodec::new(strict).decode(&bytes),
            Err(ZeroCopyError::IrregularData)
        );
    }

    #[test]
    fn test_decode_view_is_borrowed() {
        let codec = ZeroCopyCodec::default();
        let bytes = codec.encode(&sample()).unwrap();
        let view = codec.decode_view(&bytes).ok().unwrap();
        assert_eq!(view.method, b"transfer");
        assert_eq!(view.args.len(), 256);
    }
}
