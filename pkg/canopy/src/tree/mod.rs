use primitives::{hash_merge, Digest, Hasher, Keccak256};
use rayon::prelude::*;

use crate::AllowlistEntry;

mod error;
mod proof;

pub use error::{EmptyTreeError, IndexOutOfRange};
pub use proof::{Proof, ProofBundle};

/// A Merkle tree over an ordered sequence of leaf digests
///
/// The tree is built once from a finalized leaf sequence and is immutable
/// afterwards; superseding the underlying set means building a new,
/// independent tree, so proofs generated against an old root stay valid for
/// holders of that root. Every level of the tree is retained, which is what
/// makes [`proof_for`](Self::proof_for) an `O(log n)` walk instead of a
/// rebuild.
///
/// ```rust
/// # use canopy::*;
/// let leaves: Vec<Digest> = (0u8..5).map(|i| Keccak256.digest(&[i])).collect();
/// let tree = MerkleTree::from_leaves(Keccak256, leaves).unwrap();
///
/// let proof = tree.proof_for(3).unwrap();
/// assert!(proof.verify(&Keccak256, tree.leaves()[3], tree.root()));
/// ```
///
/// Parents are formed with the sorted-pair rule (see [`hash_merge`]); a
/// trailing unpaired digest on an odd level is promoted to the next level
/// unchanged. Building is idempotent: the same leaves in the same order
/// always produce the same tree and the same root.
#[derive(Debug, Clone)]
pub struct MerkleTree<H = Keccak256> {
    // levels[0] is the leaf level; the last level holds only the root
    levels: Vec<Vec<Digest>>,
    hasher: H,
}

impl<H> PartialEq for MerkleTree<H> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.root() == other.root()
    }
}

impl<H> Eq for MerkleTree<H> {}

impl<H: Hasher> MerkleTree<H> {
    /// Build a tree from an ordered sequence of leaf digests
    ///
    /// The sequence order is preserved exactly — leaves are never sorted or
    /// otherwise canonicalized, so the root depends on the order in which
    /// the caller supplies them (though not on the order within any single
    /// pair).
    ///
    /// # Errors
    ///
    /// Fails with [`EmptyTreeError`] if `leaves` is empty.
    pub fn from_leaves(hasher: H, leaves: Vec<Digest>) -> Result<Self, EmptyTreeError> {
        if leaves.is_empty() {
            return Err(EmptyTreeError);
        }

        let mut levels = vec![leaves];

        loop {
            let current = levels.last().expect("levels is never empty");
            if current.len() == 1 {
                break;
            }

            let mut next = Vec::with_capacity((current.len() + 1) / 2);
            for pair in current.chunks(2) {
                match pair {
                    [left, right] => next.push(hash_merge(&hasher, *left, *right)),
                    // a trailing unpaired digest is promoted unchanged
                    [promoted] => next.push(*promoted),
                    _ => unreachable!("chunks(2) yields one or two digests"),
                }
            }

            levels.push(next);
        }

        tracing::debug!(
            leaf_count = levels[0].len(),
            levels = levels.len(),
            "built merkle tree"
        );

        Ok(Self { levels, hasher })
    }

    /// Build a tree directly from allowlist entries
    ///
    /// Each entry is encoded and hashed to its leaf digest (in parallel —
    /// leaf hashing dominates build time for large allowlists), then the
    /// leaves are handed to [`from_leaves`](Self::from_leaves) in entry
    /// order.
    ///
    /// # Errors
    ///
    /// Fails with [`EmptyTreeError`] if `entries` is empty.
    pub fn from_entries(hasher: H, entries: &[AllowlistEntry]) -> Result<Self, EmptyTreeError>
    where
        H: Sync,
    {
        let leaves = entries
            .par_iter()
            .map(|entry| entry.leaf(&hasher))
            .collect();

        Self::from_leaves(hasher, leaves)
    }
}

impl<H> MerkleTree<H> {
    /// The root digest committing to the entire leaf sequence
    ///
    /// This is the value published to the verifying side.
    #[inline]
    #[must_use]
    pub fn root(&self) -> Digest {
        self.levels.last().expect("levels is never empty")[0]
    }

    /// The number of leaves the tree was built from
    #[inline]
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// The leaf digests, in the order they were supplied
    #[inline]
    #[must_use]
    pub fn leaves(&self) -> &[Digest] {
        &self.levels[0]
    }

    /// The number of levels, leaf level and root level included
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// The hash primitive this tree was built with
    #[inline]
    #[must_use]
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Generate the inclusion proof for the leaf at `index`
    ///
    /// The proof holds the sibling digest at each level, deepest first. At
    /// a level where the leaf's ancestor was promoted unpaired, no sibling
    /// exists and nothing is appended, so proofs in the same tree can have
    /// different lengths.
    ///
    /// ```rust
    /// # use canopy::*;
    /// let leaves: Vec<Digest> = (0u8..3).map(|i| Keccak256.digest(&[i])).collect();
    /// let tree = MerkleTree::from_leaves(Keccak256, leaves.clone()).unwrap();
    ///
    /// // the third leaf is unpaired at the leaf level: its proof holds
    /// // only the parent of the first two leaves
    /// let proof = tree.proof_for(2).unwrap();
    /// assert_eq!(proof.len(), 1);
    /// assert_eq!(
    ///     proof.siblings()[0],
    ///     hash_merge(&Keccak256, leaves[0], leaves[1]),
    /// );
    /// ```
    ///
    /// # Errors
    ///
    /// Fails with [`IndexOutOfRange`] if `index >= leaf_count`.
    pub fn proof_for(&self, index: usize) -> Result<Proof, IndexOutOfRange> {
        let leaf_count = self.leaf_count();
        if index >= leaf_count {
            return Err(IndexOutOfRange { index, leaf_count });
        }

        let mut siblings = Vec::with_capacity(self.levels.len() - 1);
        let mut position = index;

        for level in &self.levels[..self.levels.len() - 1] {
            let partner = position ^ 1;
            if partner < level.len() {
                siblings.push(level[partner]);
            }
            // a promoted node keeps its digest and halves its position,
            // contributing no sibling at this level
            position /= 2;
        }

        Ok(Proof::new(siblings))
    }
}
