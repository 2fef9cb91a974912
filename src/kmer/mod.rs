//! Canonical k-mer enumeration and hashing.
//!
//! ```rust
//! use hashcounter::kmer::hashing::{KmerHasher, DEFAULT_HASH_SEED};
//!
//! let hasher = KmerHasher::<u64>::new(3, DEFAULT_HASH_SEED);
//! let mut hashes = Vec::new();
//! hasher.hash_sequence(b"AAAT", &mut hashes);
//! assert_eq!(hashes.len(), 2); // AAA, AAT
//! ```

pub mod canonical;
pub mod hashing;
