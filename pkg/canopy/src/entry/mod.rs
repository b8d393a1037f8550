use ethnum::U256;
use primitives::{Address, Digest, Hasher};

#[cfg(feature = "serde")]
mod serde;

/// The width of an encoded entry: two 32-byte big-endian integers followed
/// by the 20-byte address
pub const ENCODED_LEN: usize = 2 * Digest::SIZE + Address::SIZE;

/// One eligible claim: a token id, an amount, and the claiming address
///
/// Entries are plain immutable values. Duplicates are permitted — each
/// occurrence produces its own leaf, and nothing in the scheme deduplicates.
///
/// ```rust
/// # use canopy::*;
/// let entry = AllowlistEntry::new(
///     U256::new(1),
///     U256::new(100),
///     "0x319a0cfD7595b0085fF6003643C7eD685269F851".parse().unwrap(),
/// );
///
/// // the same entry always encodes to the same leaf digest
/// assert_eq!(entry.leaf(&Keccak256), entry.leaf(&Keccak256));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub struct AllowlistEntry {
    /// The token id being claimed
    #[cfg_attr(feature = "serde", serde(with = "serde"))]
    pub id: U256,

    /// The amount authorized for the claim
    #[cfg_attr(feature = "serde", serde(with = "serde"))]
    pub amount: U256,

    /// The address authorized to claim
    pub address: Address,
}

impl AllowlistEntry {
    /// Create an entry from already-typed fields
    ///
    /// This cannot fail: the field types make width violations
    /// unrepresentable. Raw input goes through
    /// [`from_raw`](Self::from_raw) instead.
    #[inline]
    #[must_use]
    pub const fn new(id: U256, amount: U256, address: Address) -> Self {
        Self {
            id,
            amount,
            address,
        }
    }

    /// Create an entry from raw big-endian byte strings
    ///
    /// `id` and `amount` may be at most 32 bytes and are left-padded to the
    /// full width; `address` must be exactly 20 bytes.
    ///
    /// ```rust
    /// # use canopy::*;
    /// let entry = AllowlistEntry::from_raw(&[1], &[100], &[0x31; 20]).unwrap();
    /// assert_eq!(entry.id, U256::new(1));
    ///
    /// let error = AllowlistEntry::from_raw(&[1], &[100], &[0x31; 19]).unwrap_err();
    /// assert_eq!(error, EncodingError::AddressWidth { len: 19 });
    /// ```
    pub fn from_raw(id: &[u8], amount: &[u8], address: &[u8]) -> Result<Self, EncodingError> {
        Ok(Self {
            id: u256_from_raw("id", id)?,
            amount: u256_from_raw("amount", amount)?,
            address: Address::try_from(address).map_err(|_| EncodingError::AddressWidth {
                len: address.len(),
            })?,
        })
    }

    /// Serialize this entry to its fixed-width byte encoding
    ///
    /// Fields are laid out in declaration order — id, amount, address —
    /// each at its declared width, so no delimiters are needed and no two
    /// distinct entries share an encoding.
    #[must_use]
    pub fn encode(&self) -> [u8; ENCODED_LEN] {
        let mut buf = [0u8; ENCODED_LEN];
        buf[..32].copy_from_slice(&self.id.to_be_bytes());
        buf[32..64].copy_from_slice(&self.amount.to_be_bytes());
        buf[64..].copy_from_slice(self.address.as_bytes());
        buf
    }

    /// The leaf digest of this entry under the given hash
    #[inline]
    #[must_use]
    pub fn leaf<H: Hasher + ?Sized>(&self, hasher: &H) -> Digest {
        hasher.digest(&self.encode())
    }
}

fn u256_from_raw(field: &'static str, bytes: &[u8]) -> Result<U256, EncodingError> {
    if bytes.len() > 32 {
        return Err(EncodingError::NumericTooWide {
            field,
            len: bytes.len(),
        });
    }

    let mut buf = [0u8; 32];
    buf[32 - bytes.len()..].copy_from_slice(bytes);
    Ok(U256::from_be_bytes(buf))
}

/// An error ingesting a raw entry field of the wrong width
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    /// A numeric field was wider than its declared 256 bits
    #[error("field `{field}` is {len} bytes, wider than the declared 32")]
    NumericTooWide {
        /// Name of the offending field
        field: &'static str,
        /// The width actually supplied
        len: usize,
    },

    /// The address was not exactly its declared 20 bytes
    #[error("address is {len} bytes, expected exactly 20")]
    AddressWidth {
        /// The width actually supplied
        len: usize,
    },
}

#[cfg(any(test, feature = "proptest"))]
mod proptest_impls {
    use ::proptest::{arbitrary::StrategyFor, prelude::*, strategy::Map};
    use ethnum::U256;
    use primitives::Address;

    use super::AllowlistEntry;

    type Raw = ([u8; 32], [u8; 32], [u8; 20]);

    impl Arbitrary for AllowlistEntry {
        type Strategy = Map<StrategyFor<Raw>, fn(Raw) -> Self>;
        type Parameters = ();

        fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
            any::<Raw>().prop_map(|(id, amount, address)| Self {
                id: U256::from_be_bytes(id),
                amount: U256::from_be_bytes(amount),
                address: Address::new(address),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use primitives::{Keccak256, Sha256};
    use test_strategy::proptest;

    use super::*;

    fn address(byte: u8) -> Address {
        Address::new([byte; 20])
    }

    #[test]
    fn encoding_is_fixed_width_and_ordered() {
        let entry = AllowlistEntry::new(U256::new(1), U256::new(0x0203), address(0xaa));
        let encoded = entry.encode();

        assert_eq!(encoded.len(), ENCODED_LEN);
        assert_eq!(encoded[31], 1);
        assert_eq!(&encoded[62..64], &[0x02, 0x03]);
        assert_eq!(&encoded[64..], &[0xaa; 20]);
        assert!(encoded[..31].iter().all(|&b| b == 0));
    }

    #[test]
    fn adjacent_fields_do_not_collide() {
        // (1, 23) and (12, 3) must encode differently: fixed widths leave
        // no room for digit reshuffling between fields
        let a = AllowlistEntry::new(U256::new(1), U256::new(23), address(0));
        let b = AllowlistEntry::new(U256::new(12), U256::new(3), address(0));

        assert_ne!(a.encode().to_vec(), b.encode().to_vec());
        assert_ne!(a.leaf(&Keccak256), b.leaf(&Keccak256));
    }

    #[test]
    fn from_raw_pads_and_checks_widths() {
        let entry = AllowlistEntry::from_raw(&[1], &[0, 100], &[0xbb; 20]).unwrap();
        assert_eq!(entry.id, U256::new(1));
        assert_eq!(entry.amount, U256::new(100));
        assert_eq!(entry.address, address(0xbb));

        let err = AllowlistEntry::from_raw(&[0; 33], &[1], &[0xbb; 20]).unwrap_err();
        assert_eq!(
            err,
            EncodingError::NumericTooWide {
                field: "id",
                len: 33
            }
        );

        let err = AllowlistEntry::from_raw(&[1], &[0; 40], &[0xbb; 20]).unwrap_err();
        assert_eq!(
            err,
            EncodingError::NumericTooWide {
                field: "amount",
                len: 40
            }
        );

        let err = AllowlistEntry::from_raw(&[1], &[1], &[0xbb; 21]).unwrap_err();
        assert_eq!(err, EncodingError::AddressWidth { len: 21 });
    }

    #[proptest]
    fn from_raw_full_width_round_trips(entry: AllowlistEntry) {
        let raw = AllowlistEntry::from_raw(
            &entry.id.to_be_bytes(),
            &entry.amount.to_be_bytes(),
            entry.address.as_bytes(),
        )
        .unwrap();

        assert_eq!(raw, entry);
    }

    #[proptest]
    fn leaf_depends_on_the_hasher(entry: AllowlistEntry) {
        assert_ne!(entry.leaf(&Keccak256), entry.leaf(&Sha256));
    }

    #[cfg(feature = "serde")]
    mod serde_shapes {
        use super::*;

        #[test]
        fn accepts_integer_string_and_hex_fields() {
            let entry: AllowlistEntry = serde_json::from_str(
                r#"{"id": 1, "amount": 100, "address": "0x319a0cfD7595b0085fF6003643C7eD685269F851"}"#,
            )
            .unwrap();
            assert_eq!(entry.id, U256::new(1));
            assert_eq!(entry.amount, U256::new(100));

            let entry: AllowlistEntry = serde_json::from_str(
                r#"{"id": "2", "amount": "0x64", "address": "270e63f5ec6e6b5e3003ba77392c17f60c9f4e75"}"#,
            )
            .unwrap();
            assert_eq!(entry.id, U256::new(2));
            assert_eq!(entry.amount, U256::new(100));
        }

        #[proptest]
        fn json_round_trip(entry: AllowlistEntry) {
            let json = serde_json::to_string(&entry).unwrap();
            let back: AllowlistEntry = serde_json::from_str(&json).unwrap();
            assert_eq!(back, entry);
        }

        #[test]
        fn numeric_fields_serialize_as_decimal_strings() {
            let entry = AllowlistEntry::new(U256::new(255), U256::new(1000), address(0x11));
            let value = serde_json::to_value(entry).unwrap();

            assert_eq!(value["id"], "255");
            assert_eq!(value["amount"], "1000");
        }
    }
}
