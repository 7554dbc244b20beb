//! End-to-end workflows over both codecs with a payload-like type.

use std::io::{Read, Write};

use invoke_io::{
    BinaryReader, BinaryWriter, Decoded, IoError, Serializable, SerializableExt, ZeroCopyDecode,
    ZeroCopyEncode, ZeroCopySink, ZeroCopySource,
};
use invoke_primitives::Address;

/// Witness-like payload: two scripts behind an address.
#[derive(Debug, Clone, PartialEq)]
struct MockWitness {
    signer: Address,
    invocation_script: Vec<u8>,
    verification_script: Vec<u8>,
}

impl Serializable for MockWitness {
    type Error = IoError;

    fn size(&self) -> usize {
        Address::LENGTH
            + invoke_io::varint::var_bytes_size(&self.invocation_script)
            + invoke_io::varint::var_bytes_size(&self.verification_script)
    }

    fn serialize<W: Write>(&self, writer: &mut BinaryWriter<W>) -> Result<(), IoError> {
        self.signer.serialize(writer)?;
        writer.write_var_bytes(&self.invocation_script)?;
        writer.write_var_bytes(&self.verification_script)?;
        Ok(())
    }

    fn deserialize<R: Read>(reader: &mut BinaryReader<R>) -> Result<Self, IoError> {
        Ok(MockWitness {
            signer: Address::deserialize(reader)?,
            invocation_script: reader.read_var_bytes(1024)?,
            verification_script: reader.read_var_bytes(1024)?,
        })
    }
}

impl ZeroCopyEncode for MockWitness {
    fn encode_into(&self, sink: &mut ZeroCopySink) {
        sink.write_address(&self.signer);
        sink.write_var_bytes(&self.invocation_script);
        sink.write_var_bytes(&self.verification_script);
    }
}

impl<'a> ZeroCopyDecode<'a> for MockWitness {
    fn decode_from(source: &mut ZeroCopySource<'a>) -> Decoded<Self> {
        let (signer, mut eof) = source.next_address();
        let (invocation, _, irregular, e) = source.next_var_bytes_max(1024);
        eof |= e;
        if irregular {
            return Decoded::Irregular;
        }
        let (verification, _, irregular, e) = source.next_var_bytes_max(1024);
        eof |= e;
        Decoded::from_flags(
            MockWitness {
                signer,
                invocation_script: invocation.to_vec(),
                verification_script: verification.to_vec(),
            },
            irregular,
            eof,
        )
    }
}

fn sample() -> MockWitness {
    MockWitness {
        signer: Address::from_script(b"signer"),
        invocation_script: vec![0x0C, 0x40],
        verification_script: vec![0x41, 0x9E, 0xD0, 0xDC],
    }
}

#[test]
fn test_witness_like_serialization_workflow() {
    let witness = sample();

    let stream = witness.to_array().unwrap();
    let zero_copy = witness.to_bytes();
    assert_eq!(stream, zero_copy);
    assert_eq!(stream.len(), witness.size());
    assert_eq!(stream.len(), 20 + 1 + 2 + 1 + 4);

    assert_eq!(MockWitness::from_array(&stream).unwrap(), witness);
    assert_eq!(MockWitness::from_slice(&zero_copy), Decoded::Done(witness));
}

#[test]
fn test_sequential_records_share_one_source() {
    let first = sample();
    let second = MockWitness {
        signer: Address::zero(),
        invocation_script: vec![],
        verification_script: vec![0x56],
    };

    let mut sink = ZeroCopySink::new();
    first.encode_into(&mut sink);
    second.encode_into(&mut sink);
    let buf = sink.freeze();

    let mut source = ZeroCopySource::new(&buf);
    assert_eq!(MockWitness::decode_from(&mut source), Decoded::Done(first));
    assert_eq!(MockWitness::decode_from(&mut source), Decoded::Done(second));
    assert_eq!(source.remaining(), 0);
    assert_eq!(MockWitness::decode_from(&mut source), Decoded::Truncated);
}

#[test]
fn test_stream_failure_is_reported_per_read() {
    let bytes = sample().to_array().unwrap();
    let err = MockWitness::from_array(&bytes[..bytes.len() - 1]).unwrap_err();
    assert!(err.is_eof());
}
