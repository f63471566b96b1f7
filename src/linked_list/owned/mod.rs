//! # Owned Linked List
//!
//! This module provides a singly linked list whose links own their nodes.
//!
//! ## Core Components
//!
//! - [`traits::List`]: The operation set of the list (push, pop, insert, remove, reverse, ...).
//! - [`list::LinkedList`]: The list itself, identified by its head link.
//! - [`node::Node`]: One element of the list, holding a value and the link to the next node.
//! - [`error::ListError`]: The recoverable conditions reported by the operations.
//!
//! ## Ownership
//!
//! A [`node::Link`] is an `Option<Box<Node>>`, so a node can only be reached from one
//! predecessor and the chain always terminates. Splicing moves boxes between links;
//! nothing is freed while still reachable and nothing stays allocated once unlinked.
//!
//! Allocation of a new node is fallible: when the allocator returns null the operation
//! reports [`error::ListError::AllocFailed`] and leaves the list untouched.

pub mod error;
pub mod iter;
pub mod list;
pub mod node;
pub mod traits;
