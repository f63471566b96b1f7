use core::fmt;

use super::{
    error::ListError,
    iter::LinkedListIter,
    node::{Link, Node, Value},
    traits::List,
};

/// A singly linked list that owns its nodes.
#[derive(Default)]
pub struct LinkedList {
    head: Link,
}

impl LinkedList {
    /// Creates a new, empty linked list.
    pub const fn new() -> Self {
        LinkedList { head: None }
    }

    /// Creates a list holding `values` in the same order.
    ///
    /// If a node cannot be allocated, the nodes built so far are released
    /// and the error is returned.
    pub fn try_from_slice(values: &[Value]) -> Result<Self, ListError> {
        let mut list = Self::new();
        for &value in values.iter().rev() {
            list.push_front(value)?;
        }
        Ok(list)
    }

    /// Get the first node of the list.
    pub fn head(&self) -> Option<&Node> {
        self.head.as_deref()
    }

    /// Get the link at `position`, or the trailing empty link if the list
    /// is shorter than that.
    fn link_at_mut(&mut self, position: usize) -> &mut Link {
        let mut link = &mut self.head;
        for _ in 0..position {
            match link {
                Some(node) => link = node.next_link_mut(),
                None => break,
            }
        }
        link
    }

    /// Get the empty link after the last node.
    fn tail_link_mut(&mut self) -> &mut Link {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = node.next_link_mut();
        }
        link
    }

    /// Get the link holding the last node. For an empty or single-node list
    /// this is the head.
    fn last_link_mut(&mut self) -> &mut Link {
        let mut link = &mut self.head;
        while link.as_ref().is_some_and(|node| node.next().is_some()) {
            match link {
                Some(node) => link = node.next_link_mut(),
                None => break,
            }
        }
        link
    }
}

impl List for LinkedList {
    fn len(&self) -> usize {
        self.iter().count()
    }

    fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn front(&self) -> Option<Value> {
        self.head().map(Node::value)
    }

    fn back(&self) -> Option<Value> {
        self.iter().last()
    }

    fn get(&self, index: usize) -> Option<Value> {
        self.iter().nth(index)
    }

    fn push_front(&mut self, value: Value) -> Result<(), ListError> {
        let node = Node::try_new(value, "push_front")?;
        node.append_to(&mut self.head);
        Ok(())
    }

    fn push_back(&mut self, value: Value) -> Result<(), ListError> {
        let node = Node::try_new(value, "push_back")?;
        node.append_to(self.tail_link_mut());
        Ok(())
    }

    fn insert_at(&mut self, position: usize, value: Value) -> Result<(), ListError> {
        let node = Node::try_new(value, "insert_at")?;
        node.append_to(self.link_at_mut(position));
        Ok(())
    }

    fn pop_front(&mut self) -> Result<Value, ListError> {
        match Node::detach(&mut self.head) {
            Some(node) => Ok(node.value()),
            None => {
                log::warn!("[pop_front] List is empty");
                Err(ListError::Empty)
            }
        }
    }

    fn pop_back(&mut self) -> Result<Value, ListError> {
        match Node::detach(self.last_link_mut()) {
            Some(node) => Ok(node.value()),
            None => {
                log::warn!("[pop_back] List is empty");
                Err(ListError::Empty)
            }
        }
    }

    fn remove(&mut self, key: Value) -> Result<(), ListError> {
        let Some(position) = self.iter().position(|value| value == key) else {
            log::warn!("[remove] Node with data of {} is not in the list", key);
            return Err(ListError::KeyNotFound(key));
        };
        Node::detach(self.link_at_mut(position));
        Ok(())
    }

    fn remove_at(&mut self, position: usize) -> Result<Value, ListError> {
        match Node::detach(self.link_at_mut(position)) {
            Some(node) => Ok(node.value()),
            None => {
                let len = self.len();
                log::warn!(
                    "[remove_at] Position {} is out of range for a list of length {}",
                    position,
                    len
                );
                Err(ListError::OutOfRange { position, len })
            }
        }
    }

    fn clear(&mut self) {
        // Detach one node at a time so dropping never recurses down the chain.
        while Node::detach(&mut self.head).is_some() {}
    }

    fn reverse(&mut self) {
        let mut rest = self.head.take();
        while let Some(node) = Node::detach(&mut rest) {
            node.append_to(&mut self.head);
        }
    }

    fn iter(&self) -> LinkedListIter<'_> {
        LinkedListIter::new(self.head())
    }
}

impl Drop for LinkedList {
    fn drop(&mut self) {
        self.clear();
    }
}

impl PartialEq for LinkedList {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for LinkedList {}

impl fmt::Debug for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the values joined by `->`, e.g. `1->2->3`.
impl fmt::Display for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                f.write_str("->")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a LinkedList {
    type Item = Value;
    type IntoIter = LinkedListIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
