//! Supporting infrastructure for header parsing.
//!
//! Provides the big-endian byte reader shared by every entry point and the
//! error type returned by the parser.

pub mod byte_reader;
pub mod errors;
