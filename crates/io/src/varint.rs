//! Variable-length integer encoding shared by both codecs.
//!
//! | value range               | encoding            |
//! |---------------------------|---------------------|
//! | `< 0xFD`                  | 1 byte              |
//! | `<= 0xFFFF`               | `0xFD` + u16 LE     |
//! | `<= 0xFFFF_FFFF`          | `0xFE` + u32 LE     |
//! | otherwise                 | `0xFF` + u64 LE     |

/// Longest possible var-int encoding.
pub const MAX_VAR_INT_SIZE: usize = 9;

pub const TAG_U16: u8 = 0xFD;
pub const TAG_U32: u8 = 0xFE;
pub const TAG_U64: u8 = 0xFF;

/// Returns the number of bytes required to encode `value`.
#[inline]
pub fn var_size(value: u64) -> usize {
    if value < TAG_U16 as u64 {
        1
    } else if value <= 0xFFFF {
        1 + 2
    } else if value <= 0xFFFF_FFFF {
        1 + 4
    } else {
        1 + 8
    }
}

/// Returns the size contribution of a byte slice written as var-bytes.
#[inline]
pub fn var_bytes_size(bytes: &[u8]) -> usize {
    var_size(bytes.len() as u64) + bytes.len()
}

/// Encodes `value` into `scratch`, returning the number of bytes used.
#[inline]
pub fn put_var_uint(scratch: &mut [u8; MAX_VAR_INT_SIZE], value: u64) -> usize {
    if value < TAG_U16 as u64 {
        scratch[0] = value as u8;
        1
    } else if value <= 0xFFFF {
        scratch[0] = TAG_U16;
        scratch[1..3].copy_from_slice(&(value as u16).to_le_bytes());
        3
    } else if value <= 0xFFFF_FFFF {
        scratch[0] = TAG_U32;
        scratch[1..5].copy_from_slice(&(value as u32).to_le_bytes());
        5
    } else {
        scratch[0] = TAG_U64;
        scratch[1..9].copy_from_slice(&value.to_le_bytes());
        9
    }
}

/// Width of the payload that follows `tag`, or `None` for single-byte values.
#[inline]
pub fn payload_width(tag: u8) -> Option<usize> {
    match tag {
        TAG_U16 => Some(2),
        TAG_U32 => Some(4),
        TAG_U64 => Some(8),
        _ => None,
    }
}

/// Whether `value` was encoded in its shortest form under `tag`.
#[inline]
pub fn is_canonical(tag: u8, value: u64) -> bool {
    match tag {
        TAG_U16 => value >= TAG_U16 as u64,
        TAG_U32 => value > 0xFFFF,
        TAG_U64 => value > 0xFFFF_FFFF,
        _ => true,
    }
}

/// Little-endian integer from a 2/4/8-byte payload.
#[inline]
pub(crate) fn read_le(payload: &[u8]) -> u64 {
    let mut buf = [0u8; 8];
    buf[..payload.len()].copy_from_slice(payload);
    u64::from_le_bytes(buf)
}
