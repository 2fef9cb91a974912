//! K-mer hashing.
//!
//! Every canonical k-mer of a sequence is hashed; nothing is sub-sampled. Two
//! hash widths are available: 64-bit xxh3 (default) and 32-bit xxh32 for the
//! compact mode, which halves the size of the ownership table keys at the cost
//! of occasional collisions on large inputs.

use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;

use nohash_hasher::IsEnabled;
use xxhash_rust::xxh3::xxh3_64_with_seed;
use xxhash_rust::xxh32::xxh32;

use crate::kmer::canonical::CanonicalKmers;

/// Default seed of the k-mer hash function
pub const DEFAULT_HASH_SEED: u64 = 42;

/// An integer k-mer hash usable as a key of the ownership table.
///
/// Keys are already well-mixed hashes, so tables keyed by them use
/// `nohash_hasher` and skip rehashing.
pub trait KmerHash: Copy + Eq + Ord + Hash + IsEnabled + Debug {
    /// Width of the hash in bits
    const BITS: u32;

    fn hash_kmer(kmer: &[u8], seed: u64) -> Self;
}

impl KmerHash for u64 {
    const BITS: u32 = 64;

    #[inline]
    fn hash_kmer(kmer: &[u8], seed: u64) -> Self {
        xxh3_64_with_seed(kmer, seed)
    }
}

impl KmerHash for u32 {
    const BITS: u32 = 32;

    #[inline]
    #[allow(clippy::cast_possible_truncation)] // Low 32 bits of the seed
    fn hash_kmer(kmer: &[u8], seed: u64) -> Self {
        xxh32(kmer, seed as u32)
    }
}

/// Computes the full hash set of a sequence at a fixed k
#[derive(Debug, Clone, Copy)]
pub struct KmerHasher<H> {
    k: usize,
    seed: u64,
    _hash: PhantomData<H>,
}

impl<H: KmerHash> KmerHasher<H> {
    #[must_use]
    pub fn new(k: usize, seed: u64) -> Self {
        Self {
            k,
            seed,
            _hash: PhantomData,
        }
    }

    #[must_use]
    pub fn kmer_size(&self) -> usize {
        self.k
    }

    /// Hash a single k-mer as-is (no canonicalisation)
    #[must_use]
    pub fn hash_kmer(&self, kmer: &[u8]) -> H {
        H::hash_kmer(kmer, self.seed)
    }

    /// Fill `hashes` with the distinct canonical k-mer hashes of `seq`.
    ///
    /// The buffer is cleared first so it can be reused across subcontigs.
    /// On return it is sorted and free of duplicates.
    pub fn hash_sequence(&self, seq: &[u8], hashes: &mut Vec<H>) {
        hashes.clear();
        let kmers = CanonicalKmers::new(seq, self.k);
        hashes.reserve(kmers.positions());
        hashes.extend(kmers.iter().map(|kmer| self.hash_kmer(kmer)));
        hashes.sort_unstable();
        hashes.dedup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_sequence_counts_distinct_kmers() {
        let hasher = KmerHasher::<u64>::new(3, DEFAULT_HASH_SEED);
        let mut hashes = Vec::new();

        hasher.hash_sequence(b"AAAA", &mut hashes);
        assert_eq!(hashes.len(), 1);

        hasher.hash_sequence(b"AAAT", &mut hashes);
        assert_eq!(hashes.len(), 2);
    }

    #[test]
    fn test_hash_sequence_is_strand_independent() {
        let hasher = KmerHasher::<u64>::new(5, DEFAULT_HASH_SEED);
        let mut forward = Vec::new();
        let mut reverse = Vec::new();

        hasher.hash_sequence(b"GATTACAGGCTTAC", &mut forward);
        hasher.hash_sequence(b"GTAAGCCTGTAATC", &mut reverse);
        assert_eq!(forward, reverse);
    }

    #[test]
    fn test_buffer_is_cleared_between_calls() {
        let hasher = KmerHasher::<u32>::new(4, DEFAULT_HASH_SEED);
        let mut hashes = Vec::new();
        hasher.hash_sequence(b"ACGTTGCAAGGT", &mut hashes);
        assert!(!hashes.is_empty());

        hasher.hash_sequence(b"ACG", &mut hashes);
        assert!(hashes.is_empty());
    }

    #[test]
    fn test_seed_changes_hashes() {
        let a = KmerHasher::<u64>::new(3, 1).hash_kmer(b"ACG");
        let b = KmerHasher::<u64>::new(3, 2).hash_kmer(b"ACG");
        assert_ne!(a, b);
    }

    #[test]
    fn test_distinct_kmers_get_distinct_hashes() {
        let hasher = KmerHasher::<u32>::new(3, DEFAULT_HASH_SEED);
        assert_ne!(hasher.hash_kmer(b"AAA"), hasher.hash_kmer(b"AAC"));
        assert_eq!(<u32 as KmerHash>::BITS, 32);
    }
}
