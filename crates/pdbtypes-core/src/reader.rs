//! Sequential little-endian cursor over a borrowed byte range.
//!
//! Every read either consumes exactly the bytes it needs or fails with
//! [`ReadError`] and leaves the cursor where it was.

use crate::ReadError;

/// Cursor over a length-bounded byte slice.
#[derive(Clone, Debug)]
pub struct ByteReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Current offset from the start of the range.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left to read.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Look at the next byte without consuming it.
    pub fn peek_u8(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// Consume `len` bytes as a sub-slice.
    pub fn read_bytes(&mut self, len: usize, context: &'static str) -> Result<&'a [u8], ReadError> {
        if len > self.remaining() {
            return Err(ReadError::insufficient(len, self.remaining(), context));
        }
        let bytes = self.bytes;
        let start = self.pos;
        self.pos += len;
        Ok(&bytes[start..self.pos])
    }

    /// Consume everything left in the range.
    pub fn read_remaining(&mut self) -> &'a [u8] {
        let bytes = self.bytes;
        let start = self.pos;
        self.pos = bytes.len();
        &bytes[start..]
    }

    /// Split off the next `len` bytes as an independent reader.
    pub fn sub_reader(&mut self, len: usize, context: &'static str) -> Result<Self, ReadError> {
        self.read_bytes(len, context).map(ByteReader::new)
    }

    pub fn skip(&mut self, len: usize, context: &'static str) -> Result<(), ReadError> {
        self.read_bytes(len, context).map(|_| ())
    }

    /// Skip CodeView pad bytes (`0xF0..=0xFF`) between sub-records.
    pub fn skip_padding(&mut self) {
        while let Some(b) = self.peek_u8() {
            if b & 0xF0 != 0xF0 {
                break;
            }
            self.pos += 1;
        }
    }

    fn read_array<const N: usize>(&mut self, context: &'static str) -> Result<[u8; N], ReadError> {
        let bytes = self.read_bytes(N, context)?;
        let mut arr = [0u8; N];
        arr.copy_from_slice(bytes);
        Ok(arr)
    }

    pub fn read_u8(&mut self, context: &'static str) -> Result<u8, ReadError> {
        Ok(self.read_array::<1>(context)?[0])
    }

    pub fn read_i8(&mut self, context: &'static str) -> Result<i8, ReadError> {
        Ok(i8::from_le_bytes(self.read_array(context)?))
    }

    pub fn read_u16(&mut self, context: &'static str) -> Result<u16, ReadError> {
        Ok(u16::from_le_bytes(self.read_array(context)?))
    }

    pub fn read_i16(&mut self, context: &'static str) -> Result<i16, ReadError> {
        Ok(i16::from_le_bytes(self.read_array(context)?))
    }

    pub fn read_u32(&mut self, context: &'static str) -> Result<u32, ReadError> {
        Ok(u32::from_le_bytes(self.read_array(context)?))
    }

    pub fn read_i32(&mut self, context: &'static str) -> Result<i32, ReadError> {
        Ok(i32::from_le_bytes(self.read_array(context)?))
    }

    pub fn read_u64(&mut self, context: &'static str) -> Result<u64, ReadError> {
        Ok(u64::from_le_bytes(self.read_array(context)?))
    }

    pub fn read_i64(&mut self, context: &'static str) -> Result<i64, ReadError> {
        Ok(i64::from_le_bytes(self.read_array(context)?))
    }

    /// Read a string prefixed by a one-byte length.
    ///
    /// Invalid UTF-8 is replaced rather than rejected; names come from
    /// compilers with their own ideas about encodings.
    pub fn read_length_prefixed_string(
        &mut self,
        context: &'static str,
    ) -> Result<String, ReadError> {
        let start = self.pos;
        let len = self.read_u8(context)? as usize;
        match self.read_bytes(len, context) {
            Ok(bytes) => Ok(String::from_utf8_lossy(bytes).into_owned()),
            Err(err) => {
                self.pos = start;
                Err(err)
            }
        }
    }

    /// Read a null-terminated string. The terminator is consumed but not returned.
    pub fn read_null_terminated_string(
        &mut self,
        context: &'static str,
    ) -> Result<String, ReadError> {
        let bytes = self.bytes;
        let rest = &bytes[self.pos..];
        let Some(len) = rest.iter().position(|&b| b == 0) else {
            return Err(ReadError::UnterminatedString { context });
        };
        self.pos += len + 1;
        Ok(String::from_utf8_lossy(&rest[..len]).into_owned())
    }
}
