use std::collections::BTreeMap;

use super::{iter::Iter, name::HeaderKey};

/// HTTP Headers Map.
///
/// Keys are compared ignoring ASCII case, and at most one value is kept per key. Inserting an
/// existing key replaces both its value and the casing used when it is serialized.
///
/// Iteration yields headers sorted by case-insensitive name, not by insertion order.
#[derive(Clone, Default)]
pub struct HeaderMap {
    fields: BTreeMap<HeaderKey, HeaderField>,
}

/// Name and value as supplied by the caller.
#[derive(Clone, Debug)]
pub(crate) struct HeaderField {
    name: String,
    value: String,
}

impl HeaderField {
    #[inline]
    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub(crate) fn value(&self) -> &str {
        &self.value
    }
}

impl HeaderMap {
    /// Create new empty [`HeaderMap`].
    ///
    /// This function does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Returns headers length.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if headers has no element.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns `true` if the map contains a value for given header name, ignoring case.
    #[inline]
    pub fn contains_key(&self, name: &str) -> bool {
        self.fields.contains_key(&HeaderKey::new(name))
    }

    /// Returns the header value corresponding to the given header name, ignoring case.
    ///
    /// ```rust
    /// use emitter::headers::HeaderMap;
    ///
    /// let mut map = HeaderMap::new();
    /// map.insert("Content-Type", "text/html");
    /// assert_eq!(map.get("content-type"), Some("text/html"));
    /// ```
    #[inline]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(&HeaderKey::new(name)).map(HeaderField::value)
    }

    /// Returns an iterator over headers as name and value pair, sorted by case-insensitive
    /// name.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.fields.values())
    }

    /// Insert a header, replacing any existing value whose name matches ignoring case.
    ///
    /// Returns the previous value if any.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let field = HeaderField {
            value: value.into(),
            name,
        };
        self.fields
            .insert(HeaderKey::new(&field.name), field)
            .map(|old| old.value)
    }

    /// Removes a header from the map, returning its value if the name was present.
    #[inline]
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.fields.remove(&HeaderKey::new(name)).map(|field| field.value)
    }

    /// Clear the headers, removing all values.
    #[inline]
    pub fn clear(&mut self) {
        self.fields.clear();
    }
}

impl std::fmt::Debug for HeaderMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
