//! Property tests run against both invoke param codecs.
//! Both codecs go through the same value corpus so they cannot drift apart.

use invoke_io::varint::var_bytes_size;
use invoke_io::{Decoded, ZeroCopySink};
use invoke_primitives::Address;
use invoke_smart_contract::{InvokeCodec, InvokeParam, StreamCodec, ZeroCopyCodec};
use proptest::prelude::*;

fn arb_param() -> impl Strategy<Value = InvokeParam> {
    (
        any::<u8>(),
        any::<[u8; Address::LENGTH]>(),
        ".{0,300}",
        proptest::collection::vec(any::<u8>(), 0..600),
    )
        .prop_map(|(version, address, method, args)| {
            InvokeParam::new(version, Address::from_array(address), method, args)
        })
}

fn assert_roundtrip<C: InvokeCodec>(
    codec: &C,
    param: &InvokeParam,
) -> Result<Vec<u8>, TestCaseError> {
    let bytes = codec.encode(param).map_err(|e| TestCaseError::fail(format!("{e:?}")))?;
    let decoded = codec.decode(&bytes).map_err(|e| TestCaseError::fail(format!("{e:?}")))?;
    prop_assert_eq!(&decoded, param);
    Ok(bytes)
}

// ============================================================================
// Round-trip and cross-codec agreement
// ============================================================================

proptest! {
    #[test]
    fn roundtrip_under_both_codecs(param in arb_param()) {
        let stream = assert_roundtrip(&StreamCodec::default(), &param)?;
        let zero_copy = assert_roundtrip(&ZeroCopyCodec::default(), &param)?;
        prop_assert_eq!(stream.len(), param.as_view().size());
        prop_assert_eq!(stream, zero_copy);
    }

    #[test]
    fn each_codec_decodes_the_other(param in arb_param()) {
        let stream = StreamCodec::default();
        let zero_copy = ZeroCopyCodec::default();

        let from_stream = stream.encode(&param).unwrap();
        let from_zero_copy = zero_copy.encode(&param).unwrap();

        prop_assert_eq!(zero_copy.decode(&from_stream).unwrap(), param.clone());
        prop_assert_eq!(stream.decode(&from_zero_copy).unwrap(), param);
    }
}

// ============================================================================
// Truncation and malformed prefixes
// ============================================================================

proptest! {
    #[test]
    fn truncation_is_never_success(param in arb_param()) {
        let codec = ZeroCopyCodec::default();
        let bytes = codec.encode(&param).unwrap();

        for cut in 0..bytes.len() {
            let decoded = codec.decode_view(&bytes[..cut]);
            prop_assert!(!decoded.is_done(), "cut at {} decoded as success", cut);
            if cut <= Address::LENGTH {
                prop_assert_eq!(decoded, Decoded::Truncated);
            }
            prop_assert!(StreamCodec::default().decode(&bytes[..cut]).is_err());
        }
    }

    #[test]
    fn overlong_method_prefix_is_irregular(
        param in arb_param(),
        excess in 1u64..1_000_000,
    ) {
        // bytes actually following the method prefix
        let tail_len = (param.method.len() + var_bytes_size(&param.args)) as u64;

        let mut sink = ZeroCopySink::new();
        sink.write_u8(param.version);
        sink.write_address(&param.address);
        sink.write_var_uint(tail_len + excess);
        sink.write_bytes(param.method.as_bytes());
        sink.write_var_bytes(&param.args);
        let bytes = sink.into_vec();

        prop_assert_eq!(ZeroCopyCodec::default().decode_view(&bytes), Decoded::Irregular);
    }

    #[test]
    fn overlong_args_prefix_is_irregular(
        param in arb_param(),
        excess in 1u64..1_000_000,
    ) {
        let mut sink = ZeroCopySink::new();
        sink.write_u8(param.version);
        sink.write_address(&param.address);
        sink.write_var_bytes(param.method.as_bytes());
        sink.write_var_uint(param.args.len() as u64 + excess);
        sink.write_bytes(&param.args);
        let bytes = sink.into_vec();

        prop_assert_eq!(ZeroCopyCodec::default().decode_view(&bytes), Decoded::Irregular);
        prop_assert!(StreamCodec::default().decode(&bytes).is_err());
    }
}
