/// Errors shared by the tree and heap containers.
///
/// Every fallible operation reports immediately; a returned error means the
/// structure was left exactly as it was before the call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The requested key is not present in the tree.
    #[error("key not found")]
    KeyNotFound,
    /// `minimum` or `maximum` was called on a tree with no entries.
    #[error("tree is empty")]
    EmptyTree,
    /// `peek` or `poll` was called on a heap with no entries.
    #[error("heap is empty")]
    EmptyHeap,
    /// The key is present but has no neighbor in the requested direction.
    #[error("no neighbor in the requested direction")]
    NeighborNotFound,
    /// The key does not order against the keys already stored.
    #[error("key cannot be compared")]
    InvalidKey,
}
