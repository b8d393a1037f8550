use crate::{hash_merge, Digest, Hasher};

/// Recompute a Merkle root from a leaf and its sibling digests
///
/// `siblings` yields the sibling at each level, deepest first (leaf level
/// first, the level below the root last). Because parents are formed with
/// the sorted-pair rule of [`hash_merge`], no left/right bookkeeping is
/// needed: the accumulator and sibling are ordered by byte value at every
/// step.
///
/// For example, consider the following tree:
/// ```text
///          ┌─────┐
///          │  C  │
///          └──┬──┘
///             │
///       ┌─────┴─────┐
///       │           │
///    ┌──▼──┐     ┌──▼──┐
///    │  A  │     │  B  │
///    └──┬──┘     └──┬──┘
///       │           │
///    ┌──┴──┐     ┌──┴──┐
///    │     │     │     │
///  ┌─▼─┐ ┌─▼─┐ ┌─▼─┐ ┌─▼─┐
///  │L0 │ │L1 │ │L2 │ │L3 │
///  └───┘ └───┘ └───┘ └───┘
/// ```
/// Here `A = hash_merge(L0, L1)`, `B = hash_merge(L2, L3)`, and the root is
/// `C = hash_merge(A, B)`. To prove that `L2` is in the tree:
///
/// ```rust
/// # use primitives::*;
/// let leaves: Vec<Digest> = (0u8..4).map(|i| Keccak256.digest(&[i])).collect();
///
/// let a = hash_merge(&Keccak256, leaves[0], leaves[1]);
/// let b = hash_merge(&Keccak256, leaves[2], leaves[3]);
/// let c = hash_merge(&Keccak256, a, b);
///
/// // the siblings of L2, deepest first
/// let root = compute_merkle_root(&Keccak256, leaves[2], [leaves[3], a]);
/// assert_eq!(root, c);
///
/// // a different leaf reconstructs a different root
/// let root = compute_merkle_root(&Keccak256, leaves[0], [leaves[3], a]);
/// assert_ne!(root, c);
/// ```
#[must_use]
pub fn compute_merkle_root<H, I>(hasher: &H, leaf: Digest, siblings: I) -> Digest
where
    H: Hasher + ?Sized,
    I: IntoIterator<Item = Digest>,
{
    siblings
        .into_iter()
        .fold(leaf, |acc, sibling| hash_merge(hasher, acc, sibling))
}

#[cfg(test)]
mod tests {
    use test_strategy::proptest;

    use super::*;
    use crate::Keccak256;

    #[test]
    fn empty_sibling_sequence_returns_the_leaf() {
        let leaf = Digest::new([7; 32]);
        assert_eq!(compute_merkle_root(&Keccak256, leaf, []), leaf);
    }

    #[proptest]
    fn single_sibling_is_one_merge(leaf: Digest, sibling: Digest) {
        assert_eq!(
            compute_merkle_root(&Keccak256, leaf, [sibling]),
            hash_merge(&Keccak256, leaf, sibling),
        );
    }

    #[proptest]
    fn fold_order_is_deepest_first(leaf: Digest, siblings: [Digest; 3]) {
        let expected = hash_merge(
            &Keccak256,
            hash_merge(
                &Keccak256,
                hash_merge(&Keccak256, leaf, siblings[0]),
                siblings[1],
            ),
            siblings[2],
        );

        assert_eq!(compute_merkle_root(&Keccak256, leaf, siblings), expected);
    }
}
