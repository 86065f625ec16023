#![doc = include_str!("../README.md")]
//!
//! ## Technical Overview
//!
//! A PNG file starts with an 8-byte signature followed by a sequence of
//! chunks. The `IHDR` chunk carries the image header; its payload begins
//! with the width and the height, each a 4-byte big-endian unsigned integer.
//!
//! The parser checks the signature, walks chunk headers until it meets
//! `IHDR` (skipping payload and CRC of anything in front of it) and decodes
//! the two dimensions. Nothing past the height field is read.
//!
//! ## Quick Start
//!
//! ```rust
//! use pnghead::process::EXAMPLE_DATA;
//!
//! // From memory
//! let size = pnghead::parse_bytes(EXAMPLE_DATA)?;
//! assert_eq!(size.to_string(), "500x200");
//!
//! // From any sequential reader
//! let size = pnghead::parse_reader(std::io::Cursor::new(EXAMPLE_DATA))?;
//! assert_eq!((size.width, size.height), (500, 200));
//! # Ok::<(), pnghead::ParseError>(())
//! ```
//!
//! Errors distinguish malformed input ([`ParseError::NotPng`]), input that
//! ends too early ([`ParseError::Truncated`]) and I/O failures
//! ([`ParseError::Io`]).

/// Header parsing entry points.
pub mod process;

/// Data structures representing PNG format components.
///
/// - **Chunk framing** ([`structs::chunk`]): signature and chunk headers
/// - **Image size** ([`structs::image_size`]): decoded dimensions
pub mod structs;

/// Utility functions and supporting infrastructure.
///
/// - **Byte reader** ([`utils::byte_reader`]): big-endian sequential reads
/// - **Error Handling** ([`utils::errors`]): Error types
pub mod utils;

pub use process::parse::{parse_bytes, parse_path, parse_reader};
pub use structs::image_size::ImageSize;
pub use utils::errors::ParseError;
