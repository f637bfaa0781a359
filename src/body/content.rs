use std::io::{self, Read, Write};

use super::ChunkedEncoder;

/// Response body emission strategy.
///
/// The byte source of [`Fixed`] and [`Chunked`] is read to exhaustion once, by [`write`].
///
/// [`Fixed`]: Content::Fixed
/// [`Chunked`]: Content::Chunked
/// [`write`]: Content::write
#[derive(Default)]
pub enum Content {
    /// No body.
    #[default]
    Empty,
    /// Body of known length, written without framing.
    Fixed {
        source: Box<dyn Read + Send>,
        len: u64,
    },
    /// Body of unknown length, written with chunked transfer coding.
    Chunked {
        source: Box<dyn Read + Send>,
        encoder: ChunkedEncoder,
    },
}

impl Content {
    /// Create [`Content::Fixed`] from a byte source of exactly `len` bytes.
    #[inline]
    pub fn fixed<R: Read + Send + 'static>(source: R, len: u64) -> Self {
        Self::Fixed {
            source: Box::new(source),
            len,
        }
    }

    /// Create [`Content::Chunked`] from a byte source of unknown length.
    #[inline]
    pub fn chunked<R: Read + Send + 'static>(source: R, encoder: ChunkedEncoder) -> Self {
        Self::Chunked {
            source: Box::new(source),
            encoder,
        }
    }

    /// Returns `true` if there is no body.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the exact body length if known.
    #[inline]
    pub const fn len(&self) -> Option<u64> {
        match self {
            Self::Empty => Some(0),
            Self::Fixed { len, .. } => Some(*len),
            Self::Chunked { .. } => None,
        }
    }

    pub(crate) const fn kind(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Fixed { .. } => "fixed",
            Self::Chunked { .. } => "chunked",
        }
    }

    /// Write the body into `out`, consuming the byte source.
    ///
    /// Returns the number of payload bytes written, excluding chunk framing.
    ///
    /// # Errors
    ///
    /// Returns error if reading the source or writing `out` fails. For [`Content::Fixed`],
    /// a source that ends before `len` bytes returns [`io::ErrorKind::UnexpectedEof`].
    pub fn write<W: Write + ?Sized>(self, out: &mut W) -> io::Result<u64> {
        match self {
            Self::Empty => Ok(0),
            Self::Fixed { source, len } => {
                let copied = io::copy(&mut source.take(len), out)?;
                if copied != len {
                    return Err(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        format!("content ended after {copied} of {len} bytes"),
                    ));
                }
                Ok(copied)
            }
            Self::Chunked { mut source, encoder } => encoder.write_stream(&mut source, out),
        }
    }
}

impl std::fmt::Debug for Content {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => f.write_str("Empty"),
            Self::Fixed { len, .. } => f.debug_struct("Fixed").field("len", len).finish_non_exhaustive(),
            Self::Chunked { encoder, .. } => f
                .debug_struct("Chunked")
                .field("chunk_size", &encoder.chunk_size())
                .finish_non_exhaustive(),
        }
    }
}
