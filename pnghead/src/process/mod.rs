/// Header parsing.
///
/// Provides [`parse_bytes`](parse::parse_bytes), [`parse_reader`](parse::parse_reader)
/// and [`parse_path`](parse::parse_path), all sharing one decoding core.
pub mod parse;

/// Smallest complete PNG header: signature followed by a 500x200 IHDR chunk
/// (8-bit RGBA, no interlace) and its CRC.
pub const EXAMPLE_DATA: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52,
    0x00, 0x00, 0x01, 0xF4, 0x00, 0x00, 0x00, 0xC8, 0x08, 0x06, 0x00, 0x00, 0x00, 0x7C, 0x2A, 0x4E,
    0x21,
];
