use std::borrow::Borrow;
use std::fmt::{Debug, Display};
use std::str::FromStr;

use crate::ParseError;

/// A 256-bit hash output
///
/// `Digest` is ordered by raw byte value (`Ord` over the underlying
/// `[u8; 32]`), which is the comparison used by
/// [`hash_merge`](crate::hash_merge) to put sibling digests into canonical
/// order before hashing.
///
/// ```rust
/// # use primitives::Digest;
/// let a = Digest::new([1; 32]);
/// let b = Digest::new([2; 32]);
///
/// assert!(a < b);
/// assert_eq!(a.to_hex(), "01".repeat(32));
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Digest(
    /// The raw bytes of the digest, in the order produced by the hash
    #[cfg_attr(feature = "serde", serde(with = "serde"))]
    pub [u8; 32],
);

impl Digest {
    /// The width of a digest in bytes
    pub const SIZE: usize = 32;

    /// The all-zero digest
    ///
    /// Note that this value carries no special meaning inside the tree; it
    /// exists as a convenient placeholder for callers.
    pub const ZERO: Self = Self([0; 32]);

    /// Create a digest from its raw bytes
    #[inline]
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// The raw bytes of this digest
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Consume the digest, returning the raw bytes
    #[inline]
    #[must_use]
    pub const fn into_inner(self) -> [u8; 32] {
        self.0
    }

    /// The digest bytes as an owned `Vec`
    #[inline]
    #[must_use]
    pub fn to_vec(self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// Hex-encode this digest (lowercase, no `0x` prefix)
    #[inline]
    #[must_use]
    pub fn to_hex(self) -> String {
        hex::encode(self.0)
    }
}

impl Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl Debug for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl Borrow<[u8]> for Digest {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for Digest {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl FromStr for Digest {
    type Err = ParseError;

    /// Parse a digest from a hex string, with or without a `0x` prefix
    ///
    /// ```rust
    /// # use primitives::Digest;
    /// let digest: Digest = "0x0101010101010101010101010101010101010101010101010101010101010101"
    ///     .parse()
    ///     .unwrap();
    /// assert_eq!(digest, Digest::new([1; 32]));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let vec = hex::decode(s)?;
        let got = vec.len();
        let bytes = <[u8; 32]>::try_from(vec).map_err(|_| ParseError::Length {
            expected: Self::SIZE,
            got,
        })?;
        Ok(Self(bytes))
    }
}

#[cfg(feature = "serde")]
mod serde {
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S>(bytes: &[u8; 32], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        hex::serde::serialize(bytes, serializer)
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<[u8; 32], D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let vec = hex::decode(s.trim_start_matches("0x")).map_err(serde::de::Error::custom)?;
        <[u8; 32]>::try_from(vec).map_err(|_| serde::de::Error::custom("invalid length"))
    }
}

#[cfg(any(test, feature = "proptest"))]
mod proptest_impls {
    use ::proptest::{arbitrary::StrategyFor, prelude::*, strategy::Map};

    use super::Digest;

    impl Arbitrary for Digest {
        type Strategy = Map<StrategyFor<[u8; 32]>, fn([u8; 32]) -> Self>;
        type Parameters = ();

        fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
            any::<[u8; 32]>().prop_map(Self)
        }
    }
}
