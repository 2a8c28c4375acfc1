//! Core data types for column-aware contig handling.
//!
//! - [`AlignmentRow`](row::AlignmentRow): one A3M record (header + aligned sequence)
//! - [`ContigSpan`](span::ContigSpan): located column span of a contig, inclusive end
//! - [`ContigTables`](tables::ContigTables): target names plus one sliced table per contig
//! - [`Cardinality`](types::Cardinality): oligomeric state used when replicating chains
//! - [`Diagnostics`](diagnostics::Diagnostics): non-fatal findings collected per stage
//!
//! ## Column Classes
//!
//! A3M rows mix two kinds of characters:
//!
//! | Character | Meaning | Advances match column |
//! |-----------|---------|-----------------------|
//! | `A-Z`     | Match   | Yes |
//! | `-`       | Deletion| Yes |
//! | `a-z`     | Insertion | No |
//!
//! The reference (query) sequence has no insertions, so raw index and match-column
//! index coincide there, but not inside alignment rows.

pub mod diagnostics;
pub mod row;
pub mod span;
pub mod tables;
pub mod types;
