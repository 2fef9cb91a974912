//! # hashcounter
//!
//! A library for counting the k-mer hashes unique to each subcontig of a
//! reference collection.
//!
//! Reference genomes are split into subcontigs upstream; subcontigs below a size
//! threshold are set aside as "excluded". For every remaining subcontig,
//! `hashcounter` counts how many of its canonical k-mer hashes occur in no other
//! subcontig, excluded or not, and writes the counts to a TSV report.
//!
//! ## Features
//!
//! - **Exhaustive hashing**: every canonical k-mer is hashed, nothing is sampled
//! - **Single pass**: excluded subcontigs seed the non-unique set, included
//!   subcontigs are then counted one at a time
//! - **Compact mode**: 32-bit hashes for large collections
//! - **Gzip input**: `.gz`/`.bgz` subcontig files are read transparently
//!
//! ## Example
//!
//! ```rust
//! use hashcounter::{KmerHasher, SubcontigName, UniquenessCounter};
//!
//! let hasher = KmerHasher::<u64>::new(3, 42);
//! let mut counter = UniquenessCounter::<u64>::new();
//! let mut hashes = Vec::new();
//!
//! hasher.hash_sequence(b"AAAA", &mut hashes);
//! let a = counter.add_included(SubcontigName::parse("s;a;1_4;4").unwrap(), &hashes).unwrap();
//!
//! hasher.hash_sequence(b"AAAT", &mut hashes);
//! let b = counter.add_included(SubcontigName::parse("s;b;1_4;4").unwrap(), &hashes).unwrap();
//!
//! assert_eq!(counter.unique_count(a), Some(0));
//! assert_eq!(counter.unique_count(b), Some(1));
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Subcontig names, ordinals and hash ownership states
//! - [`kmer`]: Canonical k-mer enumeration and hashing
//! - [`counting`]: The uniqueness counter and the end-to-end pipeline
//! - [`parsing`]: Subcontig FASTA and directory readers
//! - [`report`]: The `KmerContent.report` writer
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod counting;
pub mod kmer;
pub mod parsing;
pub mod report;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::subcontig::SubcontigName;
pub use crate::core::types::*;
pub use crate::counting::counter::UniquenessCounter;
pub use crate::counting::pipeline::{CountConfig, RunSummary};
pub use crate::kmer::hashing::{KmerHash, KmerHasher};
