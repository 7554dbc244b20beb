use invoke_primitives::Address;

use crate::varint::{is_canonical, payload_width, read_le};

/// Cursor over a borrowed buffer.
///
/// Slices returned by the `next_*` methods borrow the buffer for `'a`, so
/// anything decoded from them cannot outlive it and the buffer cannot be
/// mutated while they are alive.
#[derive(Debug, Clone)]
pub struct ZeroCopySource<'a> {
    buf: &'a [u8],
    off: usize,
}

impl<'a> ZeroCopySource<'a> {
    #[inline]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, off: 0 }
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
    pub fn position(&self) -> usize {
        self.off
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.off
    }

    /// Returns up to `n` bytes. When fewer remain, returns what is left,
    /// sets `eof` and moves to the end.
    #[inline]
    pub fn next_bytes(&mut self, n: u64) -> (&'a [u8], bool) {
        let remaining = self.remaining();
        let (take, eof) = match usize::try_from(n) {
            Ok(n) if n <= remaining => (n, false),
            _ => (remaining, true),
        };
        let data = &self.buf[self.off..self.off + take];
        self.off += take;
        (data, eof)
    }

    /// Fixed-width read; zero-filled with `eof` set when the buffer is short.
    #[inline]
    pub fn next_array<const N: usize>(&mut self) -> ([u8; N], bool) {
        let (data, eof) = self.next_bytes(N as u64);
        let mut out = [0u8; N];
        if !eof {
            out.copy_from_slice(data);
        }
        (out, eof)
    }

    #[inline]
    pub fn next_byte(&mut self) -> (u8, bool) {
        let ([value], eof) = self.next_array::<1>();
        (value, eof)
    }

    /// Reads a fixed-width address; the zero address with `eof` when short.
    #[inline]
    pub fn next_address(&mut self) -> (Address, bool) {
        let (bytes, eof) = self.next_array::<{ Address::LENGTH }>();
        (Address::from_array(bytes), eof)
    }

    /// Reads a var-int.
    ///
    /// Returns `(value, size, irregular, eof)` where `size` is the number of
    /// bytes consumed. A non-canonical encoding sets `irregular`.
    pub fn next_var_uint(&mut self) -> (u64, usize, bool, bool) {
        let (tag, eof) = self.next_byte();
        if eof {
            return (0, 0, false, true);
        }
        let Some(width) = payload_width(tag) else {
            return (tag as u64, 1, false, false);
        };

        let (payload, eof) = self.next_bytes(width as u64);
        let size = 1 + payload.len();
        if eof {
            return (0, size, false, true);
        }
        let value = read_le(payload);
        (value, size, !is_canonical(tag, value), false)
    }

    /// Reads a var-int length prefix followed by that many bytes, without
    /// copying.
    ///
    /// Returns `(data, size, irregular, eof)`. A prefix that claims more
    /// bytes than remain is `irregular`, not `eof`.
    #[inline]
    pub fn next_var_bytes(&mut self) -> (&'a [u8], usize, bool, bool) {
        self.next_var_bytes_max(u64::MAX)
    }

    /// Like [`next_var_bytes`](Self::next_var_bytes), also treating a length
    /// above `max` as `irregular`.
    pub fn next_var_bytes_max(&mut self, max: u64) -> (&'a [u8], usize, bool, bool) {
        let (count, size, irregular, eof) = self.next_var_uint();
        if irregular || eof {
            return (&[], size, irregular, eof);
        }
        if count > max || count > self.remaining() as u64 {
            return (&[], size, true, false);
        }

        let (data, _) = self.next_bytes(count);
        (data, size + data.len(), false, false)
    }
}
