/// Header name, normalized to ASCII lowercase, used as [`HeaderMap`] key.
///
/// Ordering of the normalized key is the case-insensitive ordering of the supplied name.
///
/// [`HeaderMap`]: super::HeaderMap
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct HeaderKey(Box<str>);

impl HeaderKey {
    pub(crate) fn new(name: &str) -> Self {
        Self(name.to_ascii_lowercase().into_boxed_str())
    }
}

impl std::fmt::Debug for HeaderKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Standard header names emitted by the response.
pub mod standard {
    /// `Content-Length`
    pub const CONTENT_LENGTH: &str = "Content-Length";
    /// `Content-Type`
    pub const CONTENT_TYPE: &str = "Content-Type";
    /// `Transfer-Encoding`
    pub const TRANSFER_ENCODING: &str = "Transfer-Encoding";
    /// `Set-Cookie`
    pub const SET_COOKIE: &str = "Set-Cookie";

    /// `Transfer-Encoding` value for chunked framing.
    pub const CHUNKED: &str = "chunked";
}
