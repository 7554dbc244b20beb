use std::io::Read;

use tracing::trace;

use crate::varint::{is_canonical, payload_width, read_le};
use crate::{IoError, IoResult};

/// Upper bound for the up-front allocation of a var-bytes payload. Longer
/// payloads grow the buffer as bytes arrive.
const PREALLOC_LIMIT: u64 = 0x1_0000;

/// Sequential reader over any `std::io::Read` source.
pub struct BinaryReader<R: Read> {
    inner: R,
}

impl<R: Read> BinaryReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    pub fn read_u8(&mut self) -> IoResult<u8> {
        let [value] = self.read_array::<1>()?;
        Ok(value)
    }

    /// Reads exactly `N` bytes.
    pub fn read_array<const N: usize>(&mut self) -> IoResult<[u8; N]> {
        let mut buf = [0u8; N];
        self.inner.read_exact(&mut buf)?;
        Ok(buf)
    }

    /// Reads a var-int, rejecting non-canonical encodings.
    pub fn read_var_uint(&mut self) -> IoResult<u64> {
        let tag = self.read_u8()?;
        let Some(width) = payload_width(tag) else {
            return Ok(tag as u64);
        };

        let mut payload = [0u8; 8];
        self.inner.read_exact(&mut payload[..width])?;
        let value = read_le(&payload[..width]);
        if !is_canonical(tag, value) {
            trace!(tag, value, "rejecting non-canonical var-int");
            return Err(IoError::NonCanonicalVarInt { tag, value });
        }
        Ok(value)
    }

    /// Reads a var-int length prefix (at most `max`) and that many bytes.
    pub fn read_var_bytes(&mut self, max: u64) -> IoResult<Vec<u8>> {
        let len = self.read_var_uint()?;
        if len > max {
            trace!(len, max, "var-bytes length over limit");
            return Err(IoError::LengthExceeded { len, max });
        }

        let mut buf = Vec::with_capacity(len.min(PREALLOC_LIMIT) as usize);
        let read = (&mut self.inner).take(len).read_to_end(&mut buf)?;
        if (read as u64) < len {
            return Err(IoError::UnexpectedEof);
        }
        Ok(buf)
    }
}
