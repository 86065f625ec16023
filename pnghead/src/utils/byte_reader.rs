//! Sequential big-endian reader used by the header parser.
//!
//! Wraps any [`io::Read`] in a fixed big-endian reader so that buffers and
//! streams go through exactly the same decoding path. Buffers are read
//! through an [`io::Cursor`], streams are consumed as they arrive and never
//! seeked.

use std::io;

use bitstream_io::{BigEndian, BitRead, BitReader};

use crate::utils::errors::ParseError;

/// Largest number of bytes handed to a single `skip` call, kept well below
/// the `u32` bit count the underlying reader accepts.
const SKIP_STEP_BYTES: u64 = 64 * 1024;

#[derive(Debug)]
pub struct PngReader<R: io::Read> {
    bs: BitReader<R, BigEndian>,
    offset: u64,
}

pub type SliceReader<'a> = PngReader<io::Cursor<&'a [u8]>>;

impl<R> PngReader<R>
where
    R: io::Read,
{
    pub fn new(read: R) -> Self {
        Self {
            bs: BitReader::new(read),
            offset: 0,
        }
    }

    /// Fills `buf` completely or fails with [`ParseError::Truncated`].
    #[inline]
    pub fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), ParseError> {
        self.bs.read_bytes(buf)?;
        self.offset += buf.len() as u64;
        Ok(())
    }

    #[inline]
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], ParseError> {
        let mut buf = [0u8; N];
        self.read_exact(&mut buf)?;
        Ok(buf)
    }

    /// Reads a 4-byte unsigned integer in network byte order.
    #[inline]
    pub fn read_u32_be(&mut self) -> Result<u32, ParseError> {
        let value = self.bs.read_unsigned_var::<u32>(32)?;
        self.offset += 4;
        Ok(value)
    }

    /// Discards `len` bytes. Hitting the end of input first is truncation.
    pub fn skip_bytes(&mut self, len: u64) -> Result<(), ParseError> {
        let mut remaining = len;
        while remaining > 0 {
            let step = remaining.min(SKIP_STEP_BYTES);
            self.bs.skip((step << 3) as u32)?;
            self.offset += step;
            remaining -= step;
        }

        Ok(())
    }

    /// Number of bytes consumed so far.
    pub fn offset(&self) -> u64 {
        self.offset
    }
}

impl<'a> SliceReader<'a> {
    pub fn from_slice(buf: &'a [u8]) -> Self {
        Self::new(io::Cursor::new(buf))
    }
}

impl Default for SliceReader<'_> {
    fn default() -> Self {
        Self::from_slice(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_big_endian_regardless_of_host() {
        let mut reader = SliceReader::from_slice(&[0x00, 0x00, 0x01, 0xF4, 0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(reader.read_u32_be().unwrap(), 500);
        assert_eq!(reader.read_u32_be().unwrap(), 0xDEAD_BEEF);
        assert_eq!(reader.offset(), 8);
    }

    #[test]
    fn short_read_is_truncation() {
        let mut reader = SliceReader::from_slice(&[0x00, 0x01]);
        assert!(reader.read_u32_be().unwrap_err().is_truncated());

        let mut reader = SliceReader::from_slice(b"IHD");
        assert!(reader.read_array::<4>().unwrap_err().is_truncated());
    }

    #[test]
    fn skip_past_end_is_truncation() {
        let mut reader = SliceReader::from_slice(&[0u8; 10]);
        reader.skip_bytes(6).unwrap();
        assert_eq!(reader.offset(), 6);
        assert!(reader.skip_bytes(5).unwrap_err().is_truncated());
    }

    #[test]
    fn skip_spans_multiple_steps() {
        let data = vec![0xAAu8; (SKIP_STEP_BYTES * 2 + 4) as usize];
        let mut reader = SliceReader::from_slice(&data);
        reader.skip_bytes(SKIP_STEP_BYTES * 2).unwrap();
        assert_eq!(reader.read_array::<4>().unwrap(), [0xAA; 4]);
        assert!(SliceReader::default().read_array::<1>().unwrap_err().is_truncated());
    }
}
