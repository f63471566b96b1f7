use super::node::Value;

/// Conditions reported by the list operations.
///
/// None of them is fatal: the list is left in a valid state and the
/// operation that reported it made no change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// A pop was attempted on an empty list.
    #[error("list is empty")]
    Empty,

    /// No node holds the requested value.
    #[error("node with value {0} is not in the list")]
    KeyNotFound(Value),

    /// A positional removal pointed past the last node.
    #[error("position {position} is out of range for a list of length {len}")]
    OutOfRange { position: usize, len: usize },

    /// The allocator could not provide memory for a new node.
    #[error("{op}: cannot allocate a new node")]
    AllocFailed { op: &'static str },
}
