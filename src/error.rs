/// Errors produced by `Stack` operations.
///
/// A failed operation never leaves the stack partially mutated.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
pub enum StackError {
    /// The index does not address a slot of the stack.
    #[error("index {index} is out of range for a stack of {len} slots")]
    IndexOutOfRange { index: usize, len: usize },
    /// The stack has no slots to read from.
    #[error("stack is empty")]
    Empty,
    /// The slot exists but its element was removed.
    #[error("slot {index} holds no element")]
    Hole { index: usize },
    /// No additional capacity could be obtained.
    #[error("could not allocate room for {requested} slots")]
    AllocationExhausted { requested: usize },
    /// The requested capacity does not fit in `usize`.
    #[error("requested capacity overflows usize")]
    CapacityOverflow,
}
