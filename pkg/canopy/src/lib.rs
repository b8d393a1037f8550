#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::match_bool)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::single_match_else)]
#![deny(missing_docs)]

//! # Canopy
//!
//! An allowlist commitment scheme: an ordered set of `(id, amount, address)`
//! entries is committed to a single Merkle root, and membership of any entry
//! can later be proven with a compact sibling path — no access to the full
//! set required at verification time.
//!
//! ```rust
//! # use canopy::*;
//! let entries = entries![
//!     (1, 100, "0x319a0cfD7595b0085fF6003643C7eD685269F851"),
//!     (2, 50, "0x270E63f5EC6e6B5E3003ba77392c17f60C9f4E75"),
//! ];
//!
//! // commit the set; the root is what gets published
//! let allowlist = Allowlist::new(Keccak256, entries).unwrap();
//! let root = allowlist.root();
//!
//! // hand a claimant everything they need to prove eligibility
//! let bundle = allowlist.proof_bundle(0).unwrap();
//! assert!(bundle.verify(&Keccak256));
//!
//! // the verifying side holds only the published roots
//! let mut published = RootSet::new();
//! published.publish(root);
//! assert!(published.is_published(bundle.root));
//! ```
//!
//! ## Sorted-pair hashing
//!
//! Parent nodes are always formed as `hash(min(a, b) ++ max(a, b))`, with
//! the comparison over raw digest bytes. Because the pair is put into
//! canonical order before hashing, a proof is just a sequence of sibling
//! digests — verifiers never track which side a sibling sat on. The root is
//! therefore invariant to swapping the two nodes within a pair, but *not*
//! to reordering the leaf sequence itself: trees are built in exactly the
//! order the entries are supplied, and proofs refer to that ordering.
//!
//! ## Odd levels
//!
//! When a level holds an odd number of digests, the trailing digest is
//! promoted to the next level unchanged — it is neither duplicated nor
//! dropped, and it contributes no sibling to proofs at that level.
//!
//! ## Hash primitive
//!
//! All hashing goes through the [`Hasher`] trait; [`Keccak256`] is what the
//! deployed scheme uses. A tree, its proofs, and the verifier must agree on
//! the primitive — a proof generated under one hash never verifies under
//! another (except with negligible probability).

mod allowlist;
mod entry;
mod macros;
mod roots;
mod tree;

pub use allowlist::Allowlist;
pub use entry::{AllowlistEntry, EncodingError, ENCODED_LEN};
pub use roots::RootSet;
pub use tree::{EmptyTreeError, IndexOutOfRange, MerkleTree, Proof, ProofBundle};

pub use primitives::*;
