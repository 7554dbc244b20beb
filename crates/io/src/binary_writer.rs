use std::io::Write;

use crate::varint::{put_var_uint, MAX_VAR_INT_SIZE};
use crate::IoResult;

/// Sequential writer over any `std::io::Write` sink.
///
/// Every call is one attempted write; a failure is returned immediately and
/// whatever the sink already accepted stays there.
///
/// # Examples
///
/// ```rust
/// use invoke_io::BinaryWriter;
///
/// let mut writer = BinaryWriter::new(Vec::new());
/// writer.write_u8(42).unwrap();
/// writer.write_var_bytes(b"init").unwrap();
///
/// assert_eq!(writer.into_inner(), [42, 4, b'i', b'n', b'i', b't']);
/// ```
pub struct BinaryWriter<W: Write> {
    inner: W,
    scratch: [u8; MAX_VAR_INT_SIZE],
}

impl<W: Write> BinaryWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            scratch: [0; MAX_VAR_INT_SIZE],
        }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    pub fn write_u8(&mut self, value: u8) -> IoResult<()> {
        self.write_bytes(&[value])
    }

    pub fn write_bytes(&mut self, buffer: &[u8]) -> IoResult<()> {
        self.inner.write_all(buffer)?;
        Ok(())
    }

    pub fn write_var_uint(&mut self, value: u64) -> IoResult<()> {
        let n = put_var_uint(&mut self.scratch, value);
        self.inner.write_all(&self.scratch[..n])?;
        Ok(())
    }

    /// Writes a var-int length prefix followed by the bytes.
    pub fn write_var_bytes(&mut self, buffer: &[u8]) -> IoResult<()> {
        self.write_var_uint(buffer.len() as u64)?;
        self.write_bytes(buffer)
    }

    pub fn flush(&mut self) -> IoResult<()> {
        self.inner.flush()?;
        Ok(())
    }
}
