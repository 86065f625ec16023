use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use log::debug;

use crate::structs::chunk::{ChunkHeader, ChunkType, IHDR_LENGTH, read_signature};
use crate::structs::image_size::ImageSize;
use crate::utils::byte_reader::{PngReader, SliceReader};
use crate::utils::errors::ParseError;

/// Reads the image dimensions from an in-memory PNG.
///
/// Only the signature, the chunk headers in front of IHDR and the first 8
/// bytes of the IHDR payload have to be present; the rest of the buffer is
/// never looked at.
///
/// ```rust
/// use pnghead::process::{EXAMPLE_DATA, parse::parse_bytes};
///
/// let size = parse_bytes(EXAMPLE_DATA)?;
/// assert_eq!((size.width, size.height), (500, 200));
/// # Ok::<(), pnghead::utils::errors::ParseError>(())
/// ```
pub fn parse_bytes(buffer: &[u8]) -> Result<ImageSize, ParseError> {
    let reader = &mut SliceReader::from_slice(buffer);
    read_image_size(reader)
}

/// Reads the image dimensions from a sequential stream.
///
/// Chunks in front of IHDR are consumed and discarded, so the stream does
/// not need to support seeking. Reading stops right after the height field.
pub fn parse_reader<R: io::Read>(read: R) -> Result<ImageSize, ParseError> {
    let reader = &mut PngReader::new(read);
    read_image_size(reader)
}

/// Opens `path` and reads the image dimensions from it.
///
/// Failing to open or read the file is reported as [`ParseError::Io`]. The
/// file handle is closed before returning on every path.
///
/// ```rust,no_run
/// let size = pnghead::process::parse::parse_path("image.png")?;
/// println!("{size}");
/// # Ok::<(), pnghead::utils::errors::ParseError>(())
/// ```
pub fn parse_path<P: AsRef<Path>>(path: P) -> Result<ImageSize, ParseError> {
    let file = File::open(path.as_ref()).map_err(ParseError::Io)?;
    parse_reader(BufReader::new(file))
}

enum ScanState {
    SignatureChecked,
    Scanning(ChunkHeader),
    Found,
}

fn read_image_size<R: io::Read>(reader: &mut PngReader<R>) -> Result<ImageSize, ParseError> {
    read_signature(reader)?;

    let mut state = ScanState::SignatureChecked;
    let mut skipped = 0usize;

    loop {
        state = match state {
            ScanState::SignatureChecked => ScanState::Scanning(ChunkHeader::read(reader)?),
            ScanState::Scanning(header) => match header.chunk_type {
                ChunkType::IHDR => {
                    if header.length != IHDR_LENGTH {
                        return Err(ParseError::NotPng("unexpected IHDR length"));
                    }
                    ScanState::Found
                }
                ChunkType::IEND => return Err(ParseError::NotPng("no IHDR")),
                _ => {
                    debug!(
                        "Skipping {} chunk {} ({} bytes) before IHDR",
                        if header.chunk_type.is_ancillary() { "ancillary" } else { "critical" },
                        header.chunk_type,
                        header.length
                    );
                    reader.skip_bytes(header.body_len())?;
                    skipped += 1;
                    ScanState::Scanning(ChunkHeader::read(reader)?)
                }
            },
            ScanState::Found => break,
        };
    }

    let width = reader.read_u32_be()?;
    let height = reader.read_u32_be()?;

    debug!("IHDR found after {skipped} skipped chunk(s): {width}x{height}");

    Ok(ImageSize { width, height })
}
