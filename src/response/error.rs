use std::io;

/// An error that can occur when sending a response.
pub struct SendError {
    kind: Kind,
}

#[derive(Debug)]
pub enum Kind {
    /// Writing to the output or reading the body source failed.
    Io(io::Error),
    /// Response already sent, or a previous send failed.
    AlreadySent,
}

impl SendError {
    pub(crate) const fn already_sent() -> Self {
        Self {
            kind: Kind::AlreadySent,
        }
    }

    #[inline]
    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    /// Returns `true` if the error is caused by sending the same response twice.
    #[inline]
    pub const fn is_already_sent(&self) -> bool {
        matches!(self.kind, Kind::AlreadySent)
    }

    /// Returns the underlying io error, if any.
    #[inline]
    pub fn into_io(self) -> Option<io::Error> {
        match self.kind {
            Kind::Io(err) => Some(err),
            Kind::AlreadySent => None,
        }
    }
}

impl From<io::Error> for SendError {
    #[inline]
    fn from(v: io::Error) -> Self {
        Self { kind: Kind::Io(v) }
    }
}

impl std::error::Error for SendError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            Kind::Io(err) => Some(err),
            Kind::AlreadySent => None,
        }
    }
}

impl std::fmt::Display for SendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            Kind::Io(error) => write!(f, "failed to send response: {error}"),
            Kind::AlreadySent => f.write_str("response already sent"),
        }
    }
}

impl std::fmt::Debug for SendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SendError").field(&self.kind).finish()
    }
}
