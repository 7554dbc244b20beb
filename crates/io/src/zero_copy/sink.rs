use bytes::{BufMut, Bytes, BytesMut};
use invoke_primitives::Address;

use crate::varint::{put_var_uint, MAX_VAR_INT_SIZE};

/// Growable output buffer. Writes cannot fail.
#[derive(Debug, Default, Clone)]
pub struct ZeroCopySink {
    buf: BytesMut,
}

impl ZeroCopySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// Converts the written bytes into an immutable, cheaply clonable buffer.
    pub fn freeze(self) -> Bytes {
        self.buf.freeze()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.buf.to_vec()
    }

    #[inline]
    pub fn write_u8(&mut self, value: u8) {
        self.buf.put_u8(value);
    }

    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.put_slice(bytes);
    }

    #[inline]
    pub fn write_var_uint(&mut self, value: u64) {
        let mut scratch = [0u8; MAX_VAR_INT_SIZE];
        let n = put_var_uint(&mut scratch, value);
        self.buf.put_slice(&scratch[..n]);
    }

    #[inline]
    pub fn write_var_bytes(&mut self, bytes: &[u8]) {
        self.write_var_uint(bytes.len() as u64);
        self.buf.put_slice(bytes);
    }

    #[inline]
    pub fn write_address(&mut self, address: &Address) {
        self.buf.put_slice(address.as_bytes());
    }
}
