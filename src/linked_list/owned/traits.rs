use core::fmt;

use super::{error::ListError, iter::LinkedListIter, node::Value};

/// A trait for a singly linked list of [`Value`]s.
pub trait List {
    /// Get the number of nodes reachable from the head.
    ///
    /// This walks the whole list.
    fn len(&self) -> usize;

    /// Check if the list has no nodes
    fn is_empty(&self) -> bool;

    /// Get the value of the first node
    fn front(&self) -> Option<Value>;

    /// Get the value of the last node
    fn back(&self) -> Option<Value>;

    /// Get the value at a zero-based position
    fn get(&self, index: usize) -> Option<Value>;

    /// Push a new node to the front of the list
    fn push_front(&mut self, value: Value) -> Result<(), ListError>;

    /// Push a new node to the back of the list
    fn push_back(&mut self, value: Value) -> Result<(), ListError>;

    /// Insert a new node so that it ends up at `position`.
    ///
    /// Nodes from `position` on shift back by one. A `position` at or past
    /// the end appends the node.
    fn insert_at(&mut self, position: usize, value: Value) -> Result<(), ListError>;

    /// Pop the first node and return its value
    fn pop_front(&mut self) -> Result<Value, ListError>;

    /// Pop the last node and return its value
    fn pop_back(&mut self) -> Result<Value, ListError>;

    /// Remove the first node holding `key`
    fn remove(&mut self, key: Value) -> Result<(), ListError>;

    /// Remove the node at `position` and return its value
    fn remove_at(&mut self, position: usize) -> Result<Value, ListError>;

    /// Drop every node, leaving the list empty
    fn clear(&mut self);

    /// Reverse the list in place.
    ///
    /// No node is allocated or freed; only the links are turned around.
    fn reverse(&mut self);

    /// Get an iterator over the values, front to back
    fn iter(&self) -> LinkedListIter<'_>;

    /// Write one line per node, `Node {index} : {value}`, or a single
    /// `Linked List is empty` line.
    fn write_list<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        if self.is_empty() {
            return writeln!(out, "Linked List is empty");
        }
        for (index, value) in self.iter().enumerate() {
            writeln!(out, "Node {} : {}", index, value)?;
        }
        Ok(())
    }

    /// Print the list to standard output, see [`List::write_list`].
    #[cfg(feature = "std")]
    fn print_list(&self) {
        if self.is_empty() {
            std::println!("Linked List is empty");
            return;
        }
        for (index, value) in self.iter().enumerate() {
            std::println!("Node {} : {}", index, value);
        }
    }
}
