use primitives::{compute_merkle_root, Digest, Hasher};

/// An inclusion proof: the sibling digests from a leaf up to the root
///
/// Siblings are ordered deepest first and exclude the root itself. A proof
/// says nothing about left/right positions — the sorted-pair rule makes
/// them irrelevant — so it is nothing more than this sequence.
///
/// Verification is a pure fold with no shared state; a `Proof` can be
/// checked concurrently and repeatedly from any number of callers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Proof {
    siblings: Vec<Digest>,
}

impl Proof {
    /// Create a proof from an ordered sibling sequence, deepest first
    #[inline]
    #[must_use]
    pub fn new(siblings: Vec<Digest>) -> Self {
        Self { siblings }
    }

    /// The sibling digests, deepest first
    #[inline]
    #[must_use]
    pub fn siblings(&self) -> &[Digest] {
        &self.siblings
    }

    /// The number of siblings in the proof
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.siblings.len()
    }

    /// Whether the proof holds no siblings (the single-leaf tree case)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.siblings.is_empty()
    }

    /// Consume the proof, returning the sibling sequence
    #[inline]
    #[must_use]
    pub fn into_siblings(self) -> Vec<Digest> {
        self.siblings
    }

    /// Check this proof against a leaf and a claimed root
    ///
    /// Folds [`hash_merge`](primitives::hash_merge) over the siblings
    /// starting from `leaf` and compares the result with `root`. A `false`
    /// return is a normal outcome — the proof simply does not connect that
    /// leaf to that root — and is deliberately not an error: malformed but
    /// well-typed input can never make this function fail.
    ///
    /// ```rust
    /// # use canopy::*;
    /// let leaves: Vec<Digest> = (0u8..2).map(|i| Keccak256.digest(&[i])).collect();
    /// let tree = MerkleTree::from_leaves(Keccak256, leaves.clone()).unwrap();
    ///
    /// let proof = tree.proof_for(0).unwrap();
    /// assert!(proof.verify(&Keccak256, leaves[0], tree.root()));
    ///
    /// // the wrong leaf, a different root, or a foreign hash all fail
    /// assert!(!proof.verify(&Keccak256, leaves[1], tree.root()));
    /// assert!(!proof.verify(&Keccak256, leaves[0], Digest::ZERO));
    /// assert!(!proof.verify(&Sha256, leaves[0], tree.root()));
    /// ```
    #[must_use]
    pub fn verify<H: Hasher + ?Sized>(&self, hasher: &H, leaf: Digest, root: Digest) -> bool {
        compute_merkle_root(hasher, leaf, self.siblings.iter().copied()) == root
    }
}

/// A proof packaged with everything a remote verifier needs
///
/// This is the unit handed to a claimant for transmission: the leaf digest
/// being proven, the sibling path, and the root the path was generated
/// against. The verifying side compares `root` against its published set
/// and then checks the proof.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub struct ProofBundle {
    /// The leaf digest being proven
    pub leaf: Digest,
    /// The sibling path from the leaf to the root
    pub proof: Proof,
    /// The root the proof was generated against
    pub root: Digest,
}

impl ProofBundle {
    /// Check that this bundle's proof connects its leaf to its root
    #[inline]
    #[must_use]
    pub fn verify<H: Hasher + ?Sized>(&self, hasher: &H) -> bool {
        self.proof.verify(hasher, self.leaf, self.root)
    }
}
