/// Ordered list of pre-serialized cookies.
///
/// Each entry is emitted as its own `Set-Cookie` line, in insertion order. Entries are not
/// parsed, and duplicates are kept since distinct cookies may share a name.
#[derive(Clone, Debug, Default)]
pub struct CookieList {
    cookies: Vec<String>,
}

impl CookieList {
    /// Create new empty [`CookieList`].
    #[inline]
    pub const fn new() -> Self {
        Self {
            cookies: Vec::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    /// Append a serialized cookie, e.g: `"session=abc; Path=/; HttpOnly"`.
    #[inline]
    pub fn push(&mut self, cookie: impl Into<String>) {
        self.cookies.push(cookie.into());
    }

    /// Returns an iterator over cookies in insertion order.
    #[inline]
    pub fn iter(&self) -> Cookies<'_> {
        Cookies {
            iter: self.cookies.iter(),
        }
    }
}

impl<'a> IntoIterator for &'a CookieList {
    type Item = &'a str;

    type IntoIter = Cookies<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over [`CookieList`].
#[derive(Debug)]
pub struct Cookies<'a> {
    iter: std::slice::Iter<'a, String>,
}

impl<'a> Iterator for Cookies<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(String::as_str)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl ExactSizeIterator for Cookies<'_> { }
