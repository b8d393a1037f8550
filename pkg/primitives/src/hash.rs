use crate::Digest;

/// The pluggable hash primitive behind the commitment scheme
///
/// Implementations must be deterministic and produce a fixed 32-byte
/// output; the scheme treats the function as an opaque, collision-resistant
/// primitive. The deployed scheme uses [`Keccak256`].
pub trait Hasher {
    /// Hash a byte string to a fixed-width digest
    fn digest(&self, bytes: &[u8]) -> Digest;
}

impl<H: Hasher + ?Sized> Hasher for &H {
    fn digest(&self, bytes: &[u8]) -> Digest {
        (**self).digest(bytes)
    }
}

/// The Keccak-256 hash, as used by the deployed scheme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keccak256;

impl Hasher for Keccak256 {
    fn digest(&self, bytes: &[u8]) -> Digest {
        use sha3::Digest as _;

        Digest(sha3::Keccak256::digest(bytes).into())
    }
}

/// The SHA-256 hash
///
/// An alternative to [`Keccak256`] for deployments that are not bound to an
/// existing published root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha256;

impl Hasher for Sha256 {
    fn digest(&self, bytes: &[u8]) -> Digest {
        use sha2::Digest as _;

        Digest(sha2::Sha256::digest(bytes).into())
    }
}

/// Hash two digests together in canonical order
///
/// This function is used to calculate the digest of a parent node from the
/// digests of its children: the smaller digest (by raw byte value) is
/// concatenated before the larger, and the pair is hashed. Sorting first
/// makes the operation symmetric, so verifiers never need to track whether
/// a sibling sat on the left or the right:
///
/// ```rust
/// # use primitives::*;
/// let a = Keccak256.digest(b"a");
/// let b = Keccak256.digest(b"b");
///
/// let ab = hash_merge(&Keccak256, a, b);
/// let ba = hash_merge(&Keccak256, b, a);
///
/// assert_eq!(ab, ba);
/// assert_ne!(ab, a);
/// assert_ne!(ab, b);
/// ```
#[inline]
#[must_use]
pub fn hash_merge<H: Hasher + ?Sized>(hasher: &H, a: Digest, b: Digest) -> Digest {
    let (lo, hi) = match a <= b {
        true => (a, b),
        false => (b, a),
    };

    let mut buf = [0u8; 2 * Digest::SIZE];
    buf[..Digest::SIZE].copy_from_slice(lo.as_bytes());
    buf[Digest::SIZE..].copy_from_slice(hi.as_bytes());
    hasher.digest(&buf)
}

#[cfg(test)]
mod tests {
    use test_strategy::proptest;

    use super::*;

    // Published test vectors for both primitives.
    const KECCAK_EMPTY: &str = "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470";
    const KECCAK_ABC: &str = "4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45";
    const SHA256_EMPTY: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
    const SHA256_ABC: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    #[test]
    fn keccak256_known_vectors() {
        assert_eq!(Keccak256.digest(b"").to_hex(), KECCAK_EMPTY);
        assert_eq!(Keccak256.digest(b"abc").to_hex(), KECCAK_ABC);
    }

    #[test]
    fn sha256_known_vectors() {
        assert_eq!(Sha256.digest(b"").to_hex(), SHA256_EMPTY);
        assert_eq!(Sha256.digest(b"abc").to_hex(), SHA256_ABC);
    }

    #[test]
    fn hashers_disagree() {
        assert_ne!(Keccak256.digest(b"abc"), Sha256.digest(b"abc"));
    }

    #[proptest]
    fn merge_is_symmetric(a: Digest, b: Digest) {
        assert_eq!(
            hash_merge(&Keccak256, a, b),
            hash_merge(&Keccak256, b, a),
        );
    }

    #[proptest]
    fn merge_is_deterministic(a: Digest, b: Digest) {
        assert_eq!(
            hash_merge(&Keccak256, a, b),
            hash_merge(&Keccak256, a, b),
        );
    }

    #[test]
    fn merge_concatenates_sorted_operands() {
        let lo = Digest::new([1; 32]);
        let hi = Digest::new([2; 32]);

        let mut buf = [0u8; 64];
        buf[..32].copy_from_slice(lo.as_bytes());
        buf[32..].copy_from_slice(hi.as_bytes());
        let expected = Keccak256.digest(&buf);

        assert_eq!(hash_merge(&Keccak256, lo, hi), expected);
        assert_eq!(hash_merge(&Keccak256, hi, lo), expected);
    }
}
