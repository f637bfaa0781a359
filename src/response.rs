//! HTTP Response
use std::fs::File;
use std::io::{self, Read, Write};
use std::num::NonZeroUsize;
use std::path::Path;

use bytes::{Buf, Bytes, BytesMut};

use crate::body::{ChunkedEncoder, Content, DEFAULT_CHUNK_SIZE};
use crate::headers::standard::{CHUNKED, CONTENT_LENGTH, TRANSFER_ENCODING};
use crate::headers::{CookieList, HeaderMap};
use crate::http::Status;
use crate::log::{debug, warning};

pub mod write;
mod error;

pub use error::{Kind, SendError};

/// HTTP Response Parts.
#[derive(Debug, Default)]
pub struct Parts {
    pub status: Status,
    pub headers: HeaderMap,
    pub cookies: CookieList,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Configuring,
    Sent,
    Failed,
}

/// HTTP Response, written once into an output channel.
///
/// Configured through chained setters, then written by a single [`send`] call. The status
/// defaults to `200 OK` and the body to [`Content::Empty`].
///
/// # Panics
///
/// All setters panic when called after [`send`].
///
/// [`send`]: Response::send
#[derive(Debug)]
pub struct Response<W> {
    parts: Parts,
    content: Content,
    chunk_size: NonZeroUsize,
    state: State,
    out: W,
}

impl<W: Write> Response<W> {
    /// Create new [`Response`] that will be written into `out`.
    #[inline]
    pub fn new(out: W) -> Self {
        Self {
            parts: Parts::default(),
            content: Content::Empty,
            chunk_size: DEFAULT_CHUNK_SIZE,
            state: State::Configuring,
            out,
        }
    }

    #[inline]
    pub fn parts(&self) -> &Parts {
        &self.parts
    }

    #[inline]
    pub fn status(&self) -> &Status {
        &self.parts.status
    }

    #[inline]
    pub fn headers(&self) -> &HeaderMap {
        &self.parts.headers
    }

    #[inline]
    pub fn cookies(&self) -> &CookieList {
        &self.parts.cookies
    }

    #[inline]
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Returns `true` if [`send`][Response::send] has been called, successfully or not.
    #[inline]
    pub fn is_sent(&self) -> bool {
        self.state != State::Configuring
    }

    /// Returns a reference to the output channel.
    #[inline]
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Returns a mutable reference to the output channel.
    ///
    /// Writing into the channel before [`send`][Response::send] corrupts the response.
    #[inline]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Consumes the response, returning the output channel.
    #[inline]
    pub fn into_inner(self) -> W {
        self.out
    }

    #[track_caller]
    fn assert_configuring(&self) {
        assert!(
            self.state == State::Configuring,
            "response cannot be modified after it has been sent"
        );
    }

    // ===== Configuration =====

    /// Set the response status.
    ///
    /// May be called again before [`send`][Response::send], the last status set is sent.
    #[track_caller]
    pub fn set_status(&mut self, status: Status) -> &mut Self {
        self.assert_configuring();
        self.parts.status = status;
        self
    }

    /// Set a header, replacing any existing value whose name matches ignoring case.
    #[track_caller]
    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.assert_configuring();
        self.parts.headers.insert(name, value);
        self
    }

    /// Append a pre-serialized cookie, emitted as its own `Set-Cookie` line.
    #[track_caller]
    pub fn add_cookie(&mut self, cookie: impl Into<String>) -> &mut Self {
        self.assert_configuring();
        self.parts.cookies.push(cookie);
        self
    }

    /// Set the maximum chunk size of chunked content, default to [`DEFAULT_CHUNK_SIZE`].
    ///
    /// Also applies to chunked content that is already set.
    #[track_caller]
    pub fn set_chunk_size(&mut self, chunk_size: NonZeroUsize) -> &mut Self {
        self.assert_configuring();
        self.chunk_size = chunk_size;
        if let Content::Chunked { encoder, .. } = &mut self.content {
            *encoder = ChunkedEncoder::new(chunk_size);
        }
        self
    }

    /// Set in-memory body, and its `Content-Length`.
    ///
    /// ```rust
    /// use emitter::Response;
    ///
    /// let mut res = Response::new(Vec::new());
    /// res.set_content(vec![1u8, 2, 3]);
    /// assert_eq!(res.headers().get("content-length"), Some("3"));
    /// ```
    #[track_caller]
    pub fn set_content(&mut self, content: impl Into<Bytes>) -> &mut Self {
        let content = content.into();
        let len = content.len() as u64;
        self.set_content_reader(content.reader(), len)
    }

    /// Set UTF-8 text body, and its `Content-Length`.
    #[track_caller]
    pub fn set_text(&mut self, text: &str) -> &mut Self {
        self.set_content(Bytes::copy_from_slice(text.as_bytes()))
    }

    /// Set body from a byte source of exactly `len` bytes, and its `Content-Length`.
    ///
    /// At most `len` bytes are read from `source`.
    #[track_caller]
    pub fn set_content_reader<R>(&mut self, source: R, len: u64) -> &mut Self
    where
        R: Read + Send + 'static,
    {
        self.assert_configuring();
        let mut b = itoa::Buffer::new();
        self.parts.headers.insert(CONTENT_LENGTH, b.format(len));
        self.content = Content::fixed(source, len);
        self
    }

    /// Set body from a file, and its `Content-Length` from the file metadata.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be opened, its metadata cannot be read, or it is not a
    /// regular file, e.g: a directory. The response is left unchanged in that case.
    #[track_caller]
    pub fn set_content_file(&mut self, path: impl AsRef<Path>) -> io::Result<&mut Self> {
        self.assert_configuring();
        let file = File::open(path)?;
        let meta = file.metadata()?;
        if !meta.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "content path is not a regular file",
            ));
        }
        Ok(self.set_content_reader(file, meta.len()))
    }

    /// Set body from a byte source of unknown length, written with chunked transfer coding.
    #[track_caller]
    pub fn set_chunked_content<R>(&mut self, source: R) -> &mut Self
    where
        R: Read + Send + 'static,
    {
        self.assert_configuring();
        self.parts.headers.insert(TRANSFER_ENCODING, CHUNKED);
        self.content = Content::chunked(source, ChunkedEncoder::new(self.chunk_size));
        self
    }

    // ===== Send =====

    /// Write the response into the output channel.
    ///
    /// Writes and flushes the preamble, then writes the body and flushes again.
    ///
    /// # Errors
    ///
    /// Returns error if writing or flushing the output, or reading the body source, fails.
    /// Some bytes may already be written in that case.
    ///
    /// Returns [`Kind::AlreadySent`] if called more than once, without writing anything.
    #[cfg_attr(not(feature = "log"), allow(unused_variables))]
    pub fn send(&mut self) -> Result<(), SendError> {
        if self.state != State::Configuring {
            return Err(SendError::already_sent());
        }
        self.state = State::Failed;

        let content = std::mem::take(&mut self.content);
        let kind = content.kind();

        match self.write_all(content) {
            Ok(body_len) => {
                self.state = State::Sent;
                debug!("{} sent, {kind} body of {body_len} bytes", self.parts.status);
                Ok(())
            }
            Err(err) => {
                warning!("failed to send {} with {kind} body: {err}", self.parts.status);
                Err(err.into())
            }
        }
    }

    fn write_all(&mut self, content: Content) -> io::Result<u64> {
        let mut head = BytesMut::with_capacity(write::head_len(&self.parts));
        write::write_head(&self.parts, &mut head);

        self.out.write_all(&head)?;
        self.out.flush()?;

        let body_len = content.write(&mut self.out)?;
        self.out.flush()?;

        Ok(body_len)
    }
}
