//! An owned singly linked list of integer values.
//!
//! Every node is owned by exactly one link: either the list's head or the
//! `next` field of the node before it. Removing a node hands its box back to
//! the caller of the splice, which drops it before the operation returns.
//!
//! # Examples
//!
//! ```
//! use mola_slist::linked_list::owned::{
//!     error::ListError,
//!     list::LinkedList,
//!     traits::List,
//! };
//!
//! let mut list = LinkedList::new();
//! list.push_back(1).unwrap();
//! list.push_back(2).unwrap();
//! list.push_back(3).unwrap();
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.pop_front(), Ok(1));
//! assert_eq!(list.pop_back(), Ok(3));
//!
//! list.reverse();
//! assert_eq!(list.iter().collect::<Vec<_>>(), vec![2]);
//!
//! list.clear();
//! assert_eq!(list.pop_front(), Err(ListError::Empty));
//! ```
pub mod owned;
