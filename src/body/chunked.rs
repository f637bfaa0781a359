use std::io::{self, Read, Write};
use std::num::NonZeroUsize;

use bytes::{BufMut, BytesMut};

/// Default size of a single chunk.
pub const DEFAULT_CHUNK_SIZE: NonZeroUsize = NonZeroUsize::new(8192).unwrap();

const CRLF: &[u8; 2] = b"\r\n";
const CRLF_LEN: usize = CRLF.len();

/// Initial read buffer, grown up to the chunk size.
const INITIAL_BUFFER: usize = 8192;

/// Last chunk followed by an empty trailer section.
const EOF_CHUNK: &[u8; 5] = b"0\r\n\r\n";

/// Chunked transfer coding encoder.
///
/// Every chunk is framed as `<size>\r\n<bytes>\r\n`, and the stream is terminated by
/// `0\r\n\r\n`. The chunk size is written in decimal digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChunkedEncoder {
    chunk_size: NonZeroUsize,
}

impl Default for ChunkedEncoder {
    #[inline]
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_SIZE)
    }
}

impl ChunkedEncoder {
    /// Create new [`ChunkedEncoder`] which emits chunks of at most `chunk_size` bytes.
    ///
    /// The read buffer is allocated lazily, at most the size of the largest chunk emitted.
    #[inline]
    pub const fn new(chunk_size: NonZeroUsize) -> Self {
        Self { chunk_size }
    }

    /// Returns the maximum size of a single chunk.
    #[inline]
    pub const fn chunk_size(&self) -> usize {
        self.chunk_size.get()
    }

    /// Frame a single chunk into `dst`.
    ///
    /// Empty chunk is ignored, the last chunk is written by [`encode_eof`].
    ///
    /// [`encode_eof`]: ChunkedEncoder::encode_eof
    pub fn encode_chunk(chunk: &[u8], dst: &mut BytesMut) {
        if chunk.is_empty() {
            return;
        }

        let mut b = itoa::Buffer::new();
        let size = b.format(chunk.len()).as_bytes();

        dst.reserve(size.len() + CRLF_LEN + chunk.len() + CRLF_LEN);
        dst.put_slice(size);
        dst.put_slice(CRLF);
        dst.put_slice(chunk);
        dst.put_slice(CRLF);
    }

    /// Write the last chunk and the empty trailer section into `dst`.
    #[inline]
    pub fn encode_eof(dst: &mut BytesMut) {
        dst.put_slice(EOF_CHUNK);
    }

    /// Encode the whole `src` stream into `dst`, returns the number of payload bytes.
    ///
    /// A chunk is written only when the buffer is full or `src` reached end of stream, so
    /// every chunk except the last has exactly [`chunk_size`] bytes. `src` is not read again
    /// once it reported end of stream.
    ///
    /// # Errors
    ///
    /// Returns error if reading `src` or writing `dst` fails. A read failure never produces
    /// a partially framed chunk.
    ///
    /// [`chunk_size`]: ChunkedEncoder::chunk_size
    pub fn write_stream<R, W>(&self, src: &mut R, dst: &mut W) -> io::Result<u64>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        let chunk_size = self.chunk_size.get();
        let mut buffer = Vec::new();
        let mut frame = BytesMut::new();
        let mut written = 0u64;

        loop {
            let filled = fill(src, &mut buffer, chunk_size)?;
            if filled == 0 {
                break;
            }

            Self::encode_chunk(&buffer[..filled], &mut frame);
            dst.write_all(&frame)?;
            frame.clear();
            written += filled as u64;

            if filled < chunk_size {
                // end of stream reached while filling
                break;
            }
        }

        Self::encode_eof(&mut frame);
        dst.write_all(&frame)?;

        Ok(written)
    }
}

/// Read until `limit` bytes are in `buf` or `src` is exhausted, returns the filled length.
///
/// `buf` grows on demand up to `limit`, so a large chunk size over a small source does not
/// allocate the whole chunk.
fn fill<R: Read + ?Sized>(src: &mut R, buf: &mut Vec<u8>, limit: usize) -> io::Result<usize> {
    let mut filled = 0;
    while filled < limit {
        if filled == buf.len() {
            let grow = buf.len().saturating_mul(2).max(INITIAL_BUFFER).min(limit);
            buf.resize(grow, 0);
        }
        match src.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(read) => filled += read,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => { },
            Err(err) => return Err(err),
        }
    }
    Ok(filled)
}
