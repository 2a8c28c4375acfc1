//! Command-line interface for hybrid-msa.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **extract**: Slice an A3M alignment into per-contig tables
//! - **assemble**: Stitch per-contig tables into one composite A3M
//! - **replicate**: Write per-chain A3M files tagged with a cardinality
//!
//! ## Usage
//!
//! ```text
//! # Extract two contigs from a reformatted search result
//! hybrid-msa extract --msa bfd_uniclust.a3m --out-dir msas/ SFVKSHFSRQ LGLIEVQAP
//!
//! # Rebuild the composite alignment next to the chain FASTA
//! hybrid-msa assemble --fasta chain.fa --msa-dir msas/ SFVKSHFSRQ LGLIEVQAP
//!
//! # Tag it as a homotrimer
//! hybrid-msa replicate --fasta chain.fa --a3m chain.a3m --cardinality homotrimer
//!
//! # JSON report for scripting
//! hybrid-msa --format json assemble --fasta chain.fa --msa-dir msas/ SFVKSHFSRQ
//! ```

use clap::{Parser, Subcommand};

use crate::core::diagnostics::Diagnostics;
use crate::utils::validation::validate_contig;

pub mod assemble;
pub mod extract;
pub mod replicate;

#[derive(Parser)]
#[command(name = "hybrid-msa")]
#[command(version)]
#[command(about = "Extract, restitch and replicate contig regions of A3M alignments")]
#[command(
    long_about = "hybrid-msa prepares hybrid and multi-chain MSAs for structure prediction.\n\nGiven contigs (literal sub-sequences of the query) it:\n- Slices every alignment row at the contigs' match columns, keeping insertions\n- Drops rows that carry no residue in any contig\n- Restitches the slices with gap linkers sized from the query\n- Replicates the result into cardinality-tagged per-chain A3M files"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Slice an alignment into a target name table and per-contig tables
    Extract(extract::ExtractArgs),

    /// Build a composite alignment from per-contig tables
    Assemble(assemble::AssembleArgs),

    /// Write cardinality-tagged A3M files, one per FASTA record
    Replicate(replicate::ReplicateArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Validate every contig before any file is touched
pub(crate) fn validate_contigs(contigs: &[String]) -> anyhow::Result<()> {
    for contig in contigs {
        validate_contig(contig)?;
    }
    Ok(())
}

/// Print diagnostics as a text section
pub(crate) fn print_text_diagnostics(diagnostics: &Diagnostics) {
    if diagnostics.is_empty() {
        return;
    }
    println!("\nWarnings ({}):", diagnostics.len());
    for diagnostic in diagnostics {
        println!("  - {diagnostic}");
    }
}
