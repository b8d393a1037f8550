#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::match_bool)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
#![deny(missing_docs)]

//! Fixed-width value types and the hash boundary for the canopy allowlist
//! commitment scheme
//!
//! The two value types are [`Digest`] (a 32-byte hash output, ordered by raw
//! byte value) and [`Address`] (a 20-byte account identifier). The hash
//! primitive itself is pluggable behind the [`Hasher`] trait; [`Keccak256`]
//! is the implementation used by the deployed scheme, with [`Sha256`]
//! available as an alternative.
//!
//! [`hash_merge`] is the canonical rule for combining two digests into a
//! parent digest, and [`compute_merkle_root`] folds that rule over a
//! sibling sequence. Everything that hashes a pair of nodes anywhere in the
//! scheme goes through these two functions.

mod address;
mod digest;
mod error;
mod hash;
mod path;

pub use address::Address;
pub use digest::Digest;
pub use error::ParseError;
pub use hash::{hash_merge, Hasher, Keccak256, Sha256};
pub use path::compute_merkle_root;

pub use ethnum::U256;
