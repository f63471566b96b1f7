use alloc::{alloc::alloc as allocate, boxed::Box};
use core::{alloc::Layout, ptr::NonNull};

use super::error::ListError;

/// The scalar stored in every node.
pub type Value = i32;

/// An owning link: the list's head or a node's `next`.
pub type Link = Option<Box<Node>>;

/// A node in a singly linked list.
#[derive(Debug)]
pub struct Node {
    value: Value,
    next: Link,
}

impl Node {
    /// Allocates a detached node holding `value`.
    ///
    /// Unlike `Box::new`, a null return from the allocator is reported as
    /// [`ListError::AllocFailed`] instead of aborting. `op` names the
    /// operation in the error.
    pub(crate) fn try_new(value: Value, op: &'static str) -> Result<Box<Self>, ListError> {
        let layout = Layout::new::<Self>();
        // `Node` is never zero-sized, so `alloc` is allowed here.
        let ptr = NonNull::new(unsafe { allocate(layout) }.cast::<Self>()).ok_or_else(|| {
            log::error!("[{}] Memory error: cannot initialize new node", op);
            ListError::AllocFailed { op }
        })?;
        unsafe {
            ptr.as_ptr().write(Node { value, next: None });
            // Allocated by the global allocator with `Layout::new::<Node>()`,
            // which is exactly what `Box` expects to free.
            Ok(Box::from_raw(ptr.as_ptr()))
        }
    }

    /// Get the value stored in the node.
    pub fn value(&self) -> Value {
        self.value
    }

    /// Get the next node in the list.
    pub fn next(&self) -> Option<&Node> {
        self.next.as_deref()
    }

    pub(crate) fn next_link_mut(&mut self) -> &mut Link {
        &mut self.next
    }

    /// Splice the node into `slot`: whatever `slot` held becomes this node's
    /// successor and the node takes its place.
    pub(crate) fn append_to(mut self: Box<Self>, slot: &mut Link) {
        debug_assert!(self.next.is_none(), "Appending a node that is still linked");
        self.next = slot.take();
        *slot = Some(self);
    }

    /// Unlink the node held by `slot`, reattaching its successor to `slot`.
    ///
    /// The returned node is detached (`next` is none).
    pub(crate) fn detach(slot: &mut Link) -> Option<Box<Self>> {
        slot.take().map(|mut node| {
            *slot = node.next.take();
            node
        })
    }
}
