//! The contig extraction and recombination pipeline.
//!
//! Stages, in the order data flows through them:
//!
//! 1. [`locator`]: find each contig in the query's match columns, one inclusive span each
//! 2. [`extractor`]: slice every target row at the spans, counting match columns only
//! 3. [`filter`]: drop rows where no contig carries a residue, across all tables
//! 4. [`assembler`]: stitch slices back together with gap linkers into a composite
//! 5. [`replicator`]: prefix the composite with self-pairs and a cardinality tag
//!
//! Every stage returns its result together with [`Diagnostics`](crate::core::diagnostics::Diagnostics);
//! only I/O and malformed input abort a run.
//!
//! ## Example
//!
//! ```rust
//! use hybrid_msa::core::row::AlignmentRow;
//! use hybrid_msa::msa::{assembler, extractor, filter, locator};
//!
//! let reference = "MKTAYIAKQR";
//! let targets = vec![
//!     AlignmentRow::new(">t1", "MKTaAYIAKQR"),
//!     AlignmentRow::new(">t2", "----------"),
//! ];
//!
//! let contigs = vec!["KQR".to_string(), "KTA".to_string()];
//! let (spans, _) = locator::locate_all(reference, &contigs);
//! let (mut tables, _) = extractor::extract(&targets, &spans, reference.len());
//! let removed = filter::filter_empty_rows(&mut tables);
//! assert_eq!(removed, vec![1]);
//!
//! let composite = assembler::assemble(reference.len(), &spans, &tables).unwrap();
//! assert_eq!(composite.records[0].sequence, "-KTaA---KQR");
//! ```

pub mod assembler;
pub mod extractor;
pub mod filter;
pub mod locator;
pub mod replicator;
