//! HTTP Body Message.
//!
//! ## Strategy
//!
//! - [`Content`] how the body is emitted, empty, fixed length or chunked
//!
//! ## Framing
//!
//! - [`ChunkedEncoder`] chunked transfer coding of a byte stream
//!
mod chunked;
mod content;

pub use chunked::{ChunkedEncoder, DEFAULT_CHUNK_SIZE};
pub use content::Content;
