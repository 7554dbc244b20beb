//! Codecs for the primitive types of `invoke-primitives`.

use std::io::{Read, Write};

use invoke_primitives::Address;

use crate::{
    BinaryReader, BinaryWriter, Decoded, IoError, Serializable, ZeroCopyDecode, ZeroCopyEncode,
    ZeroCopySink, ZeroCopySource,
};

impl Serializable for Address {
    type Error = IoError;

    fn size(&self) -> usize {
        Address::LENGTH
    }

    fn serialize<W: Write>(&self, writer: &mut BinaryWriter<W>) -> Result<(), IoError> {
        writer.write_bytes(self.as_bytes())
    }

    fn deserialize<R: Read>(reader: &mut BinaryReader<R>) -> Result<Self, IoError> {
        Ok(Address::from_array(reader.read_array()?))
    }
}

impl ZeroCopyEncode for Address {
    fn encode_into(&self, sink: &mut ZeroCopySink) {
        sink.write_address(self);
    }
}

impl<'a> ZeroCopyDecode<'a> for Address {
    fn decode_from(source: &mut ZeroCopySource<'a>) -> Decoded<Self> {
        let (address, eof) = source.next_address();
        Decoded::from_flags(address, false, eof)
    }
}
