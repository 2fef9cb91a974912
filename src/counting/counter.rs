use std::collections::hash_map::Entry;

use nohash_hasher::IntMap;
use thiserror::Error;

use crate::core::subcontig::SubcontigName;
use crate::core::types::{Ownership, Phase, SubcontigId};
use crate::kmer::hashing::KmerHash;
use crate::report::ReportRow;
use crate::utils::validation::check_subcontig_limit;

#[derive(Error, Debug)]
pub enum CountError {
    #[error("Excluded subcontig '{0}' added after included subcontigs; exclusions must be seeded first")]
    ExclusionAfterInclusion(String),

    #[error("{0}")]
    TooManySubcontigs(String),
}

/// Running state of one subcontig
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubcontigTally {
    pub name: SubcontigName,

    /// Phase the subcontig was added in
    pub phase: Phase,

    /// Hashes currently attributed to this subcontig alone
    pub unique: u64,
}

/// Counts, for every included subcontig, the k-mer hashes found in no other
/// subcontig.
///
/// Owns the hash ownership table (hash -> [`Ownership`]) and the per-subcontig
/// unique counts. Excluded subcontigs are seeded first and only ever make
/// hashes non-unique; included subcontigs then claim unseen hashes and give
/// them up again when a second subcontig shows the same hash.
///
/// ```rust
/// use hashcounter::counting::counter::UniquenessCounter;
/// use hashcounter::core::subcontig::SubcontigName;
///
/// let mut counter = UniquenessCounter::<u64>::new();
/// let a = counter.add_included(SubcontigName::parse("s;a;1_4;4").unwrap(), &[1]).unwrap();
/// let b = counter.add_included(SubcontigName::parse("s;b;1_4;4").unwrap(), &[1, 2]).unwrap();
/// assert_eq!(counter.unique_count(a), Some(0));
/// assert_eq!(counter.unique_count(b), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct UniquenessCounter<H: KmerHash> {
    /// Absent keys are `Ownership::Unseen`
    table: IntMap<H, Ownership>,
    subcontigs: Vec<SubcontigTally>,
    phase: Phase,
}

impl<H: KmerHash> Default for UniquenessCounter<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: KmerHash> UniquenessCounter<H> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: IntMap::default(),
            subcontigs: Vec::new(),
            phase: Phase::Exclusion,
        }
    }

    fn register(&mut self, name: SubcontigName, phase: Phase) -> Result<SubcontigId, CountError> {
        if let Some(msg) = check_subcontig_limit(self.subcontigs.len()) {
            return Err(CountError::TooManySubcontigs(msg));
        }

        #[allow(clippy::cast_possible_truncation)] // Bounded by check_subcontig_limit
        let id = SubcontigId(self.subcontigs.len() as u32);
        self.subcontigs.push(SubcontigTally {
            name,
            phase,
            unique: 0,
        });
        Ok(id)
    }

    /// Add an excluded subcontig: every hash not yet in the table is marked
    /// non-unique. Hashes already present are left untouched.
    ///
    /// # Errors
    ///
    /// Returns `CountError::ExclusionAfterInclusion` once any included subcontig
    /// has been added, or `CountError::TooManySubcontigs` if the ordinal space is
    /// exhausted.
    pub fn seed_excluded(
        &mut self,
        name: SubcontigName,
        hashes: &[H],
    ) -> Result<SubcontigId, CountError> {
        if self.phase == Phase::Inclusion {
            return Err(CountError::ExclusionAfterInclusion(name.full));
        }

        let id = self.register(name, Phase::Exclusion)?;
        for &hash in hashes {
            self.table.entry(hash).or_insert(Ownership::NonUnique);
        }
        Ok(id)
    }

    /// Add an included subcontig and update unique counts.
    ///
    /// `hashes` should be the subcontig's distinct hash set. A hash repeated in
    /// the slice is treated like a hash shared with another subcontig.
    ///
    /// # Errors
    ///
    /// Returns `CountError::TooManySubcontigs` if the ordinal space is exhausted.
    pub fn add_included(
        &mut self,
        name: SubcontigName,
        hashes: &[H],
    ) -> Result<SubcontigId, CountError> {
        self.phase = Phase::Inclusion;
        let id = self.register(name, Phase::Inclusion)?;

        for &hash in hashes {
            match self.table.entry(hash) {
                Entry::Vacant(slot) => {
                    slot.insert(Ownership::OwnedBy(id));
                    self.subcontigs[id.index()].unique += 1;
                }
                Entry::Occupied(mut slot) => {
                    // Already non-unique hashes were discounted when they became so
                    if let Ownership::OwnedBy(owner) = *slot.get() {
                        self.subcontigs[owner.index()].unique -= 1;
                        slot.insert(Ownership::NonUnique);
                    }
                }
            }
        }
        Ok(id)
    }

    /// Current state of a hash in the ownership table
    #[must_use]
    pub fn ownership(&self, hash: H) -> Ownership {
        self.table
            .get(&hash)
            .copied()
            .unwrap_or(Ownership::Unseen)
    }

    #[must_use]
    pub fn unique_count(&self, id: SubcontigId) -> Option<u64> {
        self.subcontigs.get(id.index()).map(|tally| tally.unique)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of distinct hashes seen across all subcontigs
    #[must_use]
    pub fn distinct_hashes(&self) -> usize {
        self.table.len()
    }

    /// Sum of unique counts over all subcontigs
    #[must_use]
    pub fn total_unique(&self) -> u64 {
        self.subcontigs.iter().map(|tally| tally.unique).sum()
    }

    /// All subcontigs in ordinal order
    #[must_use]
    pub fn subcontigs(&self) -> &[SubcontigTally] {
        &self.subcontigs
    }

    /// Number of subcontigs added in `phase`
    #[must_use]
    pub fn subcontig_count(&self, phase: Phase) -> usize {
        self.subcontigs.iter().filter(|t| t.phase == phase).count()
    }

    /// Report rows in ordinal order.
    ///
    /// Subcontigs are filtered by name: anything whose contig field starts with
    /// `EXCLUDED_` is left out, whichever phase it was added in.
    #[must_use]
    pub fn report_rows(&self) -> Vec<ReportRow> {
        self.subcontigs
            .iter()
            .filter(|tally| !tally.name.is_excluded())
            .map(|tally| ReportRow::new(&tally.name, tally.unique))
            .collect()
    }
}
