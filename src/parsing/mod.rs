//! Readers and writers for the files passed between pipeline stages.
//!
//! This module provides:
//!
//! - **A3M alignments** ([`a3m`]): header/sequence records, wrapped lines merged,
//!   several sources concatenated into one working alignment
//! - **Reference FASTA** ([`fasta`]): ungapped chain sequences via noodles
//! - **Contig tables** ([`tables`]): `target_names.txt` plus one `<contig>.txt`
//!   per contig, row-aligned
//!
//! ## Example
//!
//! ```rust,no_run
//! use hybrid_msa::parsing::a3m::read_msa;
//! use std::path::PathBuf;
//!
//! let msa = read_msa(&[PathBuf::from("bfd_uniclust_hits.a3m")]).unwrap();
//! println!("{} targets against {}", msa.targets.len(), msa.query.name());
//! ```
//!
//! ## Column Alphabet
//!
//! | Character | Meaning |
//! |-----------|---------|
//! | `A-Z`     | Residue in a match column |
//! | `-`       | Deletion in a match column |
//! | `a-z`     | Insertion relative to the query |

pub mod a3m;
pub mod fasta;
pub mod tables;
