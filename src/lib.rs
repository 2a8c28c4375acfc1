//! # hybrid-msa
//!
//! A library for cutting contig regions out of A3M multiple sequence alignments
//! and stitching them back together for multi-chain structure prediction.
//!
//! A3M rows interleave match columns (uppercase letters and `-`) with insertion
//! columns (lowercase letters). A contig located at columns `10..=17` of the query
//! therefore sits at different raw string positions in every alignment row.
//! `hybrid-msa` does the column bookkeeping so that every sliced and restitched
//! row keeps exactly the query's number of match columns.
//!
//! ## Features
//!
//! - **Contig location**: Finds each contig in the query's match columns, warning on misses and repeats
//! - **Column-aware slicing**: Slices rows by match column, carrying insertions along
//! - **Empty-row filtering**: Drops targets with no residue in any contig, across all tables
//! - **Composite assembly**: Rejoins slices with gap linkers and checks the length invariant
//! - **Oligomer replication**: Writes cardinality-tagged, self-paired per-chain A3M files
//!
//! ## Example
//!
//! ```rust
//! use hybrid_msa::{AlignmentRow, Cardinality};
//! use hybrid_msa::msa::{assembler, extractor, filter, locator, replicator};
//! use hybrid_msa::parsing::a3m::format_a3m;
//! use hybrid_msa::parsing::fasta::ReferenceRecord;
//!
//! let query = "MKTAYIAKQRQISFVKSHFSRQ";
//! let targets = vec![AlignmentRow::new(">UniRef100_A\tA", "MKTAYIAKQRQISFVKShhHFSRQ")];
//!
//! let contigs = vec!["SFVKSHFSRQ".to_string()];
//! let (spans, _) = locator::locate_all(query, &contigs);
//! let (mut tables, _) = extractor::extract(&targets, &spans, query.len());
//! filter::filter_empty_rows(&mut tables);
//!
//! let composite = assembler::assemble(query.len(), &spans, &tables).unwrap();
//! assert_eq!(composite.records[0].sequence, "------------SFVKShhHFSRQ");
//!
//! let body = format_a3m(&composite.records);
//! let records = vec![ReferenceRecord::new("chain", query)];
//! let (files, _) = replicator::replicate("chain", &records, &body, &Cardinality::Monomer);
//! assert!(files[0].contents.starts_with("#22\t1\n>101\n"));
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Alignment rows, contig spans, tables and diagnostics
//! - [`msa`]: Locator, extractor, filter, assembler and replicator stages
//! - [`parsing`]: A3M, FASTA and contig table I/O
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod msa;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use core::diagnostics::{Diagnostic, Diagnostics};
pub use core::row::AlignmentRow;
pub use core::span::ContigSpan;
pub use core::tables::{ContigTable, ContigTables};
pub use core::types::Cardinality;
pub use msa::assembler::{assemble, Composite, Linkers};
