//! Command-line interface for hashcounter.
//!
//! This module implements the CLI using clap. The tool takes a database
//! directory laid out by the subcontig splitting step and a k-mer size:
//!
//! ```text
//! <db_directory>/
//!     Subcontigs/            subcontigs to score
//!     excludedSubcontigs/    subcontigs below the size threshold
//!     KmerContent.report     written by this tool
//! ```
//!
//! ## Usage
//!
//! ```text
//! # Count unique 21-mer hashes
//! hashcounter db/ 21
//!
//! # Memory-efficient 32-bit hashes, JSON run summary
//! hashcounter db/ 21 --compact --format json
//!
//! # Write the report elsewhere
//! hashcounter db/ 21 --output results/kmers.tsv
//! ```

use clap::Parser;

pub mod count;

#[derive(Parser)]
#[command(name = "hashcounter")]
#[command(version)]
#[command(about = "Count k-mer hashes unique to each subcontig")]
#[command(
    long_about = "hashcounter counts, for every subcontig in <db_directory>/Subcontigs, how many of its canonical k-mer hashes occur in no other subcontig.\n\nHashes of subcontigs in <db_directory>/excludedSubcontigs are treated as non-unique. Results are written to <db_directory>/KmerContent.report."
)]
pub struct Cli {
    #[command(flatten)]
    pub args: count::CountArgs,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run summary format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
