//! Core data types for unique k-mer counting.
//!
//! - [`SubcontigName`](subcontig::SubcontigName): the parsed
//!   `StrainID;ContigID;Start_Stop;Length` identifier of a subcontig
//! - [`SubcontigId`](types::SubcontigId): ordinal of a subcontig within a run
//! - [`Ownership`](types::Ownership): state of a k-mer hash in the ownership table
//!
//! ## Subcontig Naming
//!
//! Subcontigs are produced upstream by splitting each contig of each strain.
//! Their FASTA header encodes where they came from:
//!
//! | Field | Example | Notes |
//! |-------|---------|-------|
//! | StrainID | `ecoli_k12` | |
//! | ContigID | `contig_3` | `EXCLUDED_contig_3` when below the size threshold |
//! | Start_Stop | `10501_20500` | |
//! | Length | `10000` | |

pub mod subcontig;
pub mod types;
