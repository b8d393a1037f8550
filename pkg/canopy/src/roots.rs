use std::collections::HashSet;

use primitives::Digest;

/// The set of published roots held by the verifying side
///
/// The tree core itself keeps no registry — a root is just a value. The
/// party that accepts proofs owns one of these, adds each root it decides
/// to trust, and answers the membership question `is this root one we
/// published?` before checking any proof against it.
///
/// ```rust
/// # use canopy::*;
/// let mut published = RootSet::new();
/// let root = Keccak256.digest(b"some committed set");
///
/// assert!(published.publish(root));
/// assert!(!published.publish(root)); // already present
/// assert!(published.is_published(root));
///
/// assert!(published.revoke(root));
/// assert!(!published.is_published(root));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RootSet {
    roots: HashSet<Digest>,
}

impl RootSet {
    /// Create an empty set
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a root to the published set
    ///
    /// Returns `true` if the root was newly added, `false` if it was
    /// already present.
    #[inline]
    pub fn publish(&mut self, root: Digest) -> bool {
        self.roots.insert(root)
    }

    /// Whether a root has been published (and not revoked)
    #[inline]
    #[must_use]
    pub fn is_published(&self, root: Digest) -> bool {
        self.roots.contains(&root)
    }

    /// Remove a root from the published set
    ///
    /// Returns `true` if the root was present.
    #[inline]
    pub fn revoke(&mut self, root: Digest) -> bool {
        self.roots.remove(&root)
    }

    /// The number of published roots
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Whether no roots are published
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Iterate over the published roots (in no particular order)
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Digest> {
        self.roots.iter()
    }
}

impl Extend<Digest> for RootSet {
    fn extend<I: IntoIterator<Item = Digest>>(&mut self, iter: I) {
        self.roots.extend(iter);
    }
}

impl FromIterator<Digest> for RootSet {
    fn from_iter<I: IntoIterator<Item = Digest>>(iter: I) -> Self {
        Self {
            roots: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use primitives::{Hasher, Keccak256};

    use super::*;

    #[test]
    fn publish_revoke_lifecycle() {
        let mut set = RootSet::new();
        assert!(set.is_empty());

        let a = Keccak256.digest(b"a");
        let b = Keccak256.digest(b"b");

        assert!(set.publish(a));
        assert!(set.publish(b));
        assert!(!set.publish(a));
        assert_eq!(set.len(), 2);

        assert!(set.is_published(a));
        assert!(!set.is_published(Keccak256.digest(b"c")));

        assert!(set.revoke(a));
        assert!(!set.revoke(a));
        assert!(!set.is_published(a));
        assert!(set.is_published(b));
    }

    #[test]
    fn collects_from_iterators() {
        let roots: Vec<Digest> = (0u8..4).map(|i| Keccak256.digest(&[i])).collect();

        let set: RootSet = roots.iter().copied().collect();
        assert_eq!(set.len(), 4);
        assert!(roots.iter().all(|root| set.is_published(*root)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let set: RootSet = (0u8..4).map(|i| Keccak256.digest(&[i])).collect();

        let json = serde_json::to_string(&set).unwrap();
        let back: RootSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
