//! End-to-end run over a database directory.
//!
//! Excluded subcontigs are hashed first and only seed the non-unique set; included
//! subcontigs are then hashed one at a time and counted. The hash buffer is reused
//! between subcontigs so only one subcontig's hashes are alive at any point.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::core::types::Phase;
use crate::counting::counter::UniquenessCounter;
use crate::kmer::hashing::{KmerHash, KmerHasher, DEFAULT_HASH_SEED};
use crate::parsing::directory::list_sequence_files;
use crate::parsing::fasta::{read_subcontigs, SubcontigRecord};
use crate::report::{write_report_file, REPORT_FILE_NAME};

/// Sub-directory of the database holding the subcontigs to score
pub const SUBCONTIGS_DIR: &str = "Subcontigs";

/// Sub-directory of the database holding subcontigs below the size threshold
pub const EXCLUDED_SUBCONTIGS_DIR: &str = "excludedSubcontigs";

/// Everything a run needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountConfig {
    pub subcontigs_dir: PathBuf,
    pub excluded_dir: PathBuf,
    pub output: PathBuf,
    pub kmer_size: usize,
    pub seed: u64,
    /// Use 32-bit hashes instead of 64-bit
    pub compact: bool,
}

impl CountConfig {
    /// Default layout of a database directory
    pub fn from_db_dir(db_dir: impl AsRef<Path>, kmer_size: usize) -> Self {
        let db_dir = db_dir.as_ref();
        Self {
            subcontigs_dir: db_dir.join(SUBCONTIGS_DIR),
            excluded_dir: db_dir.join(EXCLUDED_SUBCONTIGS_DIR),
            output: db_dir.join(REPORT_FILE_NAME),
            kmer_size,
            seed: DEFAULT_HASH_SEED,
            compact: false,
        }
    }
}

/// Totals of a completed run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub kmer_size: usize,
    pub hash_bits: u32,
    pub excluded_subcontigs: usize,
    pub included_subcontigs: usize,
    pub reported_subcontigs: usize,
    /// Distinct hashes over excluded and included subcontigs
    pub distinct_hashes: usize,
    /// Hashes found in exactly one included subcontig
    pub unique_hashes: u64,
    pub report: PathBuf,
    pub elapsed_secs: f64,
}

/// Count unique hashes for every subcontig and write the report.
///
/// # Errors
///
/// Returns an error if either subcontig directory is missing, a subcontig file
/// cannot be parsed, or the report cannot be written.
pub fn run(config: &CountConfig) -> anyhow::Result<RunSummary> {
    if config.compact {
        info!("Compact mode enabled: 32-bit hashes, accuracy drops on very large inputs");
        run_with::<u32>(config)
    } else {
        run_with::<u64>(config)
    }
}

fn run_with<H: KmerHash>(config: &CountConfig) -> anyhow::Result<RunSummary> {
    let start = Instant::now();

    // List both directories before hashing anything so a bad layout fails fast
    let excluded_files = list_sequence_files(&config.excluded_dir).with_context(|| {
        format!(
            "Failed to list excluded subcontigs in {}",
            config.excluded_dir.display()
        )
    })?;
    let included_files = list_sequence_files(&config.subcontigs_dir).with_context(|| {
        format!(
            "Failed to list subcontigs in {}",
            config.subcontigs_dir.display()
        )
    })?;

    info!(
        "Started counting unique hashes (k={}, {} excluded files, {} subcontig files)",
        config.kmer_size,
        excluded_files.len(),
        included_files.len()
    );

    let hasher = KmerHasher::<H>::new(config.kmer_size, config.seed);
    let mut counter = UniquenessCounter::<H>::new();
    let mut hashes: Vec<H> = Vec::new();
    let mut names = HashSet::new();

    info!("Hashing excluded subcontigs and marking their hashes as non-unique");
    for path in &excluded_files {
        for record in read_file(path)? {
            check_name(&mut names, &record, Phase::Exclusion);
            hasher.hash_sequence(&record.sequence, &mut hashes);
            counter.seed_excluded(record.name, &hashes)?;
        }
    }
    info!(
        "Found {} distinct hashes in {} excluded subcontigs",
        counter.distinct_hashes(),
        counter.subcontig_count(Phase::Exclusion)
    );

    info!("Hashing subcontigs and counting unique hashes");
    for path in &included_files {
        for record in read_file(path)? {
            check_name(&mut names, &record, Phase::Inclusion);
            hasher.hash_sequence(&record.sequence, &mut hashes);
            let id = counter.add_included(record.name, &hashes)?;
            debug!(
                "Subcontig {id}: {} distinct hashes, {} unique so far",
                hashes.len(),
                counter.unique_count(id).unwrap_or_default()
            );
        }
    }

    let rows = counter.report_rows();
    write_report_file(&config.output, &rows)
        .with_context(|| format!("Failed to write report {}", config.output.display()))?;

    let summary = RunSummary {
        kmer_size: config.kmer_size,
        hash_bits: H::BITS,
        excluded_subcontigs: counter.subcontig_count(Phase::Exclusion),
        included_subcontigs: counter.subcontig_count(Phase::Inclusion),
        reported_subcontigs: rows.len(),
        distinct_hashes: counter.distinct_hashes(),
        unique_hashes: counter.total_unique(),
        report: config.output.clone(),
        elapsed_secs: start.elapsed().as_secs_f64(),
    };

    info!(
        "Found {} distinct hashes, {} unique to a single subcontig",
        summary.distinct_hashes, summary.unique_hashes
    );
    info!(
        "Wrote {} rows to {} in {:.1}s",
        summary.reported_subcontigs,
        summary.report.display(),
        summary.elapsed_secs
    );

    Ok(summary)
}

fn read_file(path: &Path) -> anyhow::Result<Vec<SubcontigRecord>> {
    let records = read_subcontigs(path)
        .with_context(|| format!("Failed to read subcontigs from {}", path.display()))?;
    if records.is_empty() {
        warn!("No sequences found in {}", path.display());
    }
    Ok(records)
}

fn check_name(names: &mut HashSet<String>, record: &SubcontigRecord, phase: Phase) {
    if !names.insert(record.name.full.clone()) {
        warn!(
            "Duplicate subcontig name '{}', it will be reported more than once",
            record.name
        );
    }
    if phase == Phase::Exclusion && !record.name.is_excluded() {
        warn!(
            "Excluded subcontig '{}' has no EXCLUDED_ contig prefix and will appear in the report",
            record.name
        );
    }
}
