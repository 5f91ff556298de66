use std::iter::FusedIterator;

use super::ItemNode;

/// Borrowing iterator over the names of an `ItemList`, front to back.
#[derive(Clone)]
pub struct Iter<'a> {
    next: Option<&'a ItemNode>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(super) fn new(first: Option<&'a ItemNode>, len: usize) -> Self {
        Self {
            next: first,
            remaining: len,
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            node.name.as_str()
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
