/// An error building a tree from zero leaves
///
/// The root of an empty set is undefined, so the builder refuses the input
/// rather than inventing a sentinel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot build a merkle tree from zero leaves")]
pub struct EmptyTreeError;

/// An error requesting a proof for a leaf position that does not exist
///
/// This is a programmer error on the caller's side; it is never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("leaf index {index} is out of range for a tree with {leaf_count} leaves")]
pub struct IndexOutOfRange {
    /// The index that was requested
    pub index: usize,
    /// The number of leaves in the tree
    pub leaf_count: usize,
}
