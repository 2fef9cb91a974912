//! Unique k-mer hash counting.
//!
//! - [`counter`]: the ownership table and per-subcontig unique counts
//! - [`pipeline`]: a full run from a database directory to the report
//!
//! ## Ownership rules
//!
//! | Hash state | Excluded subcontig | Included subcontig `N` |
//! |------------|--------------------|------------------------|
//! | Unseen | mark non-unique | mark owned by `N`, count(`N`) + 1 |
//! | Owned by `M` | (cannot happen) | count(`M`) - 1, mark non-unique |
//! | Non-unique | nothing | nothing |
//!
//! A hash therefore contributes to a subcontig's count only if no other
//! subcontig, excluded or included, contains it.

pub mod counter;
pub mod pipeline;
