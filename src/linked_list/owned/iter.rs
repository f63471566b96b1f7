use super::node::{Node, Value};

/// An iterator over the values of a linked list, front to back.
#[derive(Debug, Clone)]
pub struct LinkedListIter<'a> {
    current: Option<&'a Node>,
}

impl<'a> LinkedListIter<'a> {
    /// Creates a new iterator starting at `head`.
    pub(crate) fn new(head: Option<&'a Node>) -> Self {
        Self { current: head }
    }
}

impl Iterator for LinkedListIter<'_> {
    type Item = Value;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|current| {
            self.current = current.next();
            current.value()
        })
    }
}

impl core::iter::FusedIterator for LinkedListIter<'_> {}
