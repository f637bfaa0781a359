use std::collections::btree_map::Values;

use super::{HeaderMap, map::HeaderField, name::HeaderKey};

impl<'a> IntoIterator for &'a HeaderMap {
    type Item = <Iter<'a> as Iterator>::Item;

    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over [`HeaderMap`] name and value pairs.
#[derive(Debug)]
pub struct Iter<'a> {
    iter: Values<'a, HeaderKey, HeaderField>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(iter: Values<'a, HeaderKey, HeaderField>) -> Self {
        Self { iter }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|field| (field.name(), field.value()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> { }
