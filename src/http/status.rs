use std::borrow::Cow;

/// HTTP Status, a numeric code and its reason phrase.
///
/// The pair is opaque, no check is performed that the code is registered or that the reason
/// matches it. Rendered on the wire as `<code> <reason>`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Status {
    code: u16,
    reason: Cow<'static, str>,
}

impl Default for Status {
    #[inline]
    fn default() -> Self {
        Self::OK
    }
}

impl Status {
    /// Create new [`Status`] from code and reason phrase.
    #[inline]
    pub fn new(code: u16, reason: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code,
            reason: reason.into(),
        }
    }

    /// Create new [`Status`] from static reason phrase.
    #[inline]
    pub const fn from_static(code: u16, reason: &'static str) -> Self {
        Self {
            code,
            reason: Cow::Borrowed(reason),
        }
    }

    /// Returns status code value, e.g: `200`.
    #[inline]
    pub const fn code(&self) -> u16 {
        self.code
    }

    /// Returns reason phrase, e.g: `"OK"`.
    #[inline]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

macro_rules! status {
    (
        $(
            $(#[$doc:meta])*
            $int:literal $id:ident $msg:literal;
        )*
    ) => {
        impl Status {
            $(
                $(#[$doc])*
                pub const $id: Self = Self::from_static($int, $msg);
            )*
        }
    };
}

status! {
    /// `200`. The request succeeded.
    200 OK "OK";
    /// `201`. The request succeeded, and a new resource was created as a result.
    201 CREATED "Created";
    /// `204`. There is no content to send for this request, but the headers are useful.
    204 NO_CONTENT "No Content";
    /// `302`. The URI of requested resource has been changed temporarily.
    302 FOUND "Found";
    /// `304`. The response has not been modified.
    304 NOT_MODIFIED "Not Modified";
    /// `400`. The server cannot or will not process the request due to a client error.
    400 BAD_REQUEST "Bad Request";
    /// `403`. The client does not have access rights to the content.
    403 FORBIDDEN "Forbidden";
    /// `404`. The server cannot find the requested resource.
    404 NOT_FOUND "Not Found";
    /// `405`. The request method is not supported by the target resource.
    405 METHOD_NOT_ALLOWED "Method Not Allowed";
    /// `500`. The server has encountered a situation it does not know how to handle.
    500 INTERNAL_SERVER_ERROR "Internal Server Error";
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.code, self.reason)
    }
}

impl std::fmt::Debug for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_tuple("Status").field(&self.code).field(&self.reason).finish()
    }
}
