use std::fmt::{Debug, Display};
use std::str::FromStr;

use crate::ParseError;

/// A 20-byte account identifier
///
/// This is the recipient field of an allowlist entry. Conversions accept
/// hex strings with or without a `0x` prefix; the width is always enforced.
///
/// ```rust
/// # use primitives::Address;
/// let address: Address = "0x319a0cfD7595b0085fF6003643C7eD685269F851".parse().unwrap();
/// assert_eq!(address.as_bytes()[0], 0x31);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Address(
    /// The raw bytes of the address
    #[cfg_attr(feature = "serde", serde(with = "serde"))]
    pub [u8; 20],
);

impl Address {
    /// The width of an address in bytes
    pub const SIZE: usize = 20;

    /// The all-zero address
    pub const ZERO: Self = Self([0; 20]);

    /// Create an address from its raw bytes
    #[inline]
    #[must_use]
    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// The raw bytes of this address
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Hex-encode this address (lowercase, no `0x` prefix)
    #[inline]
    #[must_use]
    pub fn to_hex(self) -> String {
        hex::encode(self.0)
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl Debug for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = ParseError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes = <[u8; 20]>::try_from(bytes).map_err(|_| ParseError::Length {
            expected: Self::SIZE,
            got: bytes.len(),
        })?;
        Ok(Self(bytes))
    }
}

impl FromStr for Address {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let vec = hex::decode(s)?;
        Self::try_from(vec.as_slice())
    }
}

#[cfg(feature = "serde")]
mod serde {
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S>(bytes: &[u8; 20], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        hex::serde::serialize(bytes, serializer)
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<[u8; 20], D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let vec = hex::decode(s.trim_start_matches("0x")).map_err(serde::de::Error::custom)?;
        <[u8; 20]>::try_from(vec).map_err(|_| serde::de::Error::custom("invalid length"))
    }
}

#[cfg(any(test, feature = "proptest"))]
mod proptest_impls {
    use ::proptest::{arbitrary::StrategyFor, prelude::*, strategy::Map};

    use super::Address;

    impl Arbitrary for Address {
        type Strategy = Map<StrategyFor<[u8; 20]>, fn([u8; 20]) -> Self>;
        type Parameters = ();

        fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
            any::<[u8; 20]>().prop_map(Self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_prefix() {
        let bare: Address = "319a0cfd7595b0085ff6003643c7ed685269f851".parse().unwrap();
        let prefixed: Address = "0x319a0cfD7595b0085fF6003643C7eD685269F851".parse().unwrap();
        assert_eq!(bare, prefixed);
    }

    #[test]
    fn rejects_wrong_width() {
        let err = Address::try_from([0u8; 19].as_slice()).unwrap_err();
        assert!(matches!(err, ParseError::Length { expected: 20, got: 19 }));

        let err = "0x1234".parse::<Address>().unwrap_err();
        assert!(matches!(err, ParseError::Length { expected: 20, got: 2 }));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let address = Address::new([0xab; 20]);
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, format!("\"{}\"", "ab".repeat(20)));

        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, address);
    }
}
