use primitives::{Address, Digest, Hasher, Keccak256};

use crate::{AllowlistEntry, EmptyTreeError, IndexOutOfRange, MerkleTree, Proof, ProofBundle};

/// A finalized allowlist: the entry sequence plus its committed tree
///
/// This is the issuing side's working set. It owns the entries in the order
/// they were supplied and the tree built over them, and packages proofs for
/// individual claimants. The verifying side needs none of this — only the
/// [`root`](Self::root) and, per claim, a [`ProofBundle`].
///
/// An `Allowlist` is immutable. When the eligible set changes, build a new
/// one; the old tree (and any proofs generated from it) remains internally
/// consistent for holders of the old root.
///
/// ```rust
/// # use canopy::*;
/// let allowlist = Allowlist::new(
///     Keccak256,
///     entries![
///         (1, 100, "0x319a0cfD7595b0085fF6003643C7eD685269F851"),
///         (2, 50, "0x270E63f5EC6e6B5E3003ba77392c17f60C9f4E75"),
///     ],
/// )
/// .unwrap();
///
/// let claimant: Address = "0x270E63f5EC6e6B5E3003ba77392c17f60C9f4E75".parse().unwrap();
/// let bundle = allowlist.bundle_for_address(claimant).unwrap();
///
/// assert_eq!(bundle.root, allowlist.root());
/// assert!(bundle.verify(&Keccak256));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allowlist<H = Keccak256> {
    entries: Vec<AllowlistEntry>,
    tree: MerkleTree<H>,
}

impl<H: Hasher + Sync> Allowlist<H> {
    /// Commit an ordered entry sequence
    ///
    /// Entry order is preserved exactly and determines the root; see
    /// [`MerkleTree::from_leaves`].
    ///
    /// # Errors
    ///
    /// Fails with [`EmptyTreeError`] if `entries` is empty.
    pub fn new(hasher: H, entries: Vec<AllowlistEntry>) -> Result<Self, EmptyTreeError> {
        let tree = MerkleTree::from_entries(hasher, &entries)?;

        tracing::debug!(
            entries = entries.len(),
            root = %tree.root(),
            "assembled allowlist"
        );

        Ok(Self { entries, tree })
    }
}

impl<H> Allowlist<H> {
    /// The root committing to the whole entry sequence
    ///
    /// This is the value to publish to the verifying side.
    #[inline]
    #[must_use]
    pub fn root(&self) -> Digest {
        self.tree.root()
    }

    /// The entries, in the order they were committed
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[AllowlistEntry] {
        &self.entries
    }

    /// The underlying tree
    #[inline]
    #[must_use]
    pub fn tree(&self) -> &MerkleTree<H> {
        &self.tree
    }

    /// The number of committed entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the allowlist holds no entries
    ///
    /// Always `false` — construction rejects empty entry sequences — but
    /// provided for API completeness.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The inclusion proof for the entry at `index`
    ///
    /// # Errors
    ///
    /// Fails with [`IndexOutOfRange`] if `index >= len`.
    pub fn proof_for(&self, index: usize) -> Result<Proof, IndexOutOfRange> {
        self.tree.proof_for(index)
    }

    /// Package the proof for the entry at `index` for transmission
    ///
    /// # Errors
    ///
    /// Fails with [`IndexOutOfRange`] if `index >= len`.
    pub fn proof_bundle(&self, index: usize) -> Result<ProofBundle, IndexOutOfRange> {
        let proof = self.tree.proof_for(index)?;

        Ok(ProofBundle {
            leaf: self.tree.leaves()[index],
            proof,
            root: self.root(),
        })
    }

    /// Package the proof for the first entry claiming `address`
    ///
    /// Entries are scanned in committed order and the first match wins, so
    /// under duplicate addresses the result is deterministic. Returns
    /// `None` when no entry claims the address.
    #[must_use]
    pub fn bundle_for_address(&self, address: Address) -> Option<ProofBundle> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.address == address)?;

        Some(
            self.proof_bundle(index)
                .expect("position is always in range"),
        )
    }
}
