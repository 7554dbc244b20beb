//! Serialization traits shared by every wire type.

use std::io::{Read, Write};

use crate::{BinaryReader, BinaryWriter, Decoded, ZeroCopySink, ZeroCopySource};

/// Stream codec: reads and writes through `std::io` one field at a time.
pub trait Serializable: Sized {
    type Error;

    /// The size of the object in bytes after serialization.
    fn size(&self) -> usize;

    fn serialize<W: Write>(&self, writer: &mut BinaryWriter<W>) -> Result<(), Self::Error>;

    fn deserialize<R: Read>(reader: &mut BinaryReader<R>) -> Result<Self, Self::Error>;
}

/// Extension methods for serializable objects.
pub trait SerializableExt: Serializable {
    /// Serializes into a freshly allocated byte vector.
    fn to_array(&self) -> Result<Vec<u8>, Self::Error> {
        let mut writer = BinaryWriter::new(Vec::with_capacity(self.size()));
        self.serialize(&mut writer)?;
        Ok(writer.into_inner())
    }

    fn from_array(data: &[u8]) -> Result<Self, Self::Error> {
        let mut reader = BinaryReader::new(data);
        Self::deserialize(&mut reader)
    }
}

impl<T: Serializable> SerializableExt for T {}

/// Zero-copy encoding into a growable sink. Cannot fail.
pub trait ZeroCopyEncode {
    fn encode_into(&self, sink: &mut ZeroCopySink);

    fn to_bytes(&self) -> Vec<u8> {
        let mut sink = ZeroCopySink::new();
        self.encode_into(&mut sink);
        sink.into_vec()
    }
}

/// Zero-copy decoding. The decoded value may borrow from the source buffer.
pub trait ZeroCopyDecode<'a>: Sized {
    fn decode_from(source: &mut ZeroCopySource<'a>) -> Decoded<Self>;

    fn from_slice(buf: &'a [u8]) -> Decoded<Self> {
        Self::decode_from(&mut ZeroCopySource::new(buf))
    }
}
