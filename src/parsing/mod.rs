//! Readers for subcontig inputs.
//!
//! - **FASTA files**: one or more subcontig records per file, optionally
//!   gzip/bgzip compressed ([`fasta`])
//! - **Subcontig directories**: deterministic enumeration of the sequence files
//!   in `Subcontigs/` and `excludedSubcontigs/` ([`directory`])
//!
//! ## Example
//!
//! ```rust,no_run
//! use hashcounter::parsing::{directory::list_sequence_files, fasta::read_subcontigs};
//! use std::path::Path;
//!
//! for path in list_sequence_files(Path::new("db/Subcontigs")).unwrap() {
//!     for record in read_subcontigs(&path).unwrap() {
//!         println!("{}\t{}", record.name, record.sequence.len());
//!     }
//! }
//! ```

use std::path::PathBuf;

use thiserror::Error;

pub mod directory;
pub mod fasta;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("Malformed subcontig name '{name}': expected 4 ';'-separated fields, found {fields}")]
    MalformedName { name: String, fields: usize },

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}
