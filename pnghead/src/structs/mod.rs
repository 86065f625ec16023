//! Data structures for the parts of the PNG format the parser touches.
//!
//! - **Chunk framing** ([`chunk`]): signature, chunk headers and type tags
//! - **Image size** ([`image_size`]): the decoded IHDR dimensions

pub mod chunk;
pub mod image_size;
