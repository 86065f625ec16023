//! PNG chunk framing
//!
//! A PNG file is the 8-byte signature followed by chunks laid out as
//! `[length: u32 BE][type: 4 bytes][payload: length bytes][crc: u32 BE]`.
//! Only the chunk header is decoded here; payloads and CRCs are skipped.

use std::fmt::{Debug, Display, Formatter};

use log::trace;

use crate::utils::byte_reader::PngReader;
use crate::utils::errors::ParseError;

/// The fixed 8-byte PNG file signature.
pub const SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Declared payload length of every valid IHDR chunk.
pub const IHDR_LENGTH: u32 = 13;

/// Trailing CRC after each chunk payload.
pub const CHUNK_CRC_LENGTH: u64 = 4;

/// Four-byte ASCII chunk type tag.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkType(pub [u8; 4]);

impl ChunkType {
    pub const IHDR: ChunkType = ChunkType(*b"IHDR");
    pub const IEND: ChunkType = ChunkType(*b"IEND");

    /// Ancillary chunks have bit 5 of the first byte set (lowercase letter).
    pub fn is_ancillary(&self) -> bool {
        self.0[0] & 0x20 != 0
    }
}

impl Display for ChunkType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for &b in &self.0 {
            if b.is_ascii_graphic() {
                write!(f, "{}", b as char)?;
            } else {
                write!(f, "\\x{b:02X}")?;
            }
        }
        Ok(())
    }
}

impl Debug for ChunkType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ChunkType({self})")
    }
}

/// Length and type read in front of every chunk payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    pub length: u32,
    pub chunk_type: ChunkType,
}

impl ChunkHeader {
    pub fn read<R: std::io::Read>(reader: &mut PngReader<R>) -> Result<Self, ParseError> {
        let offset = reader.offset();
        let length = reader.read_u32_be()?;
        let chunk_type = ChunkType(reader.read_array::<4>()?);

        trace!("Chunk header at offset {offset}: type = {chunk_type}, length = {length}");

        Ok(Self { length, chunk_type })
    }

    /// Bytes between the end of this header and the start of the next one.
    pub fn body_len(&self) -> u64 {
        self.length as u64 + CHUNK_CRC_LENGTH
    }
}

/// Consumes the signature, failing with `NotPng` on any differing byte.
pub fn read_signature<R: std::io::Read>(reader: &mut PngReader<R>) -> Result<(), ParseError> {
    let signature = reader.read_array::<8>()?;
    if signature != SIGNATURE {
        trace!("Signature mismatch: read {signature:02X?}");
        return Err(ParseError::NotPng("signature mismatch"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::byte_reader::SliceReader;

    #[test]
    fn chunk_header_fields() {
        let mut reader = SliceReader::from_slice(&[0x00, 0x00, 0x00, 0x06, b't', b'E', b'X', b't']);
        let header = ChunkHeader::read(&mut reader).unwrap();
        assert_eq!(header.length, 6);
        assert_eq!(header.chunk_type, ChunkType(*b"tEXt"));
        assert!(header.chunk_type.is_ancillary());
        assert_eq!(header.body_len(), 10);
    }

    #[test]
    fn chunk_type_display_escapes_binary() {
        assert_eq!(ChunkType::IHDR.to_string(), "IHDR");
        assert!(!ChunkType::IHDR.is_ancillary());
        assert_eq!(ChunkType([b'a', 0x00, b'b', 0xFF]).to_string(), "a\\x00b\\xFF");
    }

    #[test]
    fn body_len_does_not_overflow() {
        let header = ChunkHeader {
            length: u32::MAX,
            chunk_type: ChunkType(*b"zzzz"),
        };
        assert_eq!(header.body_len(), u32::MAX as u64 + 4);
    }

    #[test]
    fn signature_checks() {
        assert!(read_signature(&mut SliceReader::from_slice(&SIGNATURE)).is_ok());

        let mut bad = SIGNATURE;
        bad[7] ^= 0x01;
        assert!(read_signature(&mut SliceReader::from_slice(&bad)).unwrap_err().is_not_png());

        assert!(read_signature(&mut SliceReader::from_slice(&SIGNATURE[..5]))
            .unwrap_err()
            .is_truncated());
    }
}
