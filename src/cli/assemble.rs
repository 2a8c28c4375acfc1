use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;

use crate::cli::{print_text_diagnostics, validate_contigs, OutputFormat};
use crate::core::diagnostics::Diagnostics;
use crate::msa::assembler::{assemble, Composite};
use crate::msa::locator;
use crate::parsing::a3m::write_a3m_file;
use crate::parsing::fasta::{fasta_stem, read_reference};
use crate::parsing::tables::read_tables;

#[derive(Args)]
pub struct AssembleArgs {
    /// FASTA whose first record is the full-length chain
    #[arg(long, required = true)]
    pub fasta: PathBuf,

    /// Directory holding target_names.txt and the per-contig tables
    #[arg(long, required = true)]
    pub msa_dir: PathBuf,

    /// Output A3M (default: <fasta stem>.a3m next to the FASTA)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Contig sub-sequences, in any order
    #[arg(required = true)]
    pub contigs: Vec<String>,
}

/// Default composite path: `<fasta dir>/<fasta stem>.a3m`
#[must_use]
pub fn default_output_path(fasta: &Path) -> PathBuf {
    fasta.with_file_name(format!("{}.a3m", fasta_stem(fasta)))
}

/// Execute assemble subcommand
///
/// # Errors
///
/// Returns an error if a contig is invalid, the FASTA or any table cannot be
/// read, no contig can be located, the tables are not row-aligned, or the output
/// cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: AssembleArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    validate_contigs(&args.contigs)?;

    let reference = read_reference(&args.fasta)
        .with_context(|| format!("Failed to read reference from {}", args.fasta.display()))?;

    if verbose {
        eprintln!(
            "Reference {} ({} residues)",
            reference.name,
            reference.len()
        );
    }

    let (spans, locate_diagnostics) = locator::locate_all(&reference.sequence, &args.contigs);
    let located: Vec<String> = spans.iter().map(|s| s.contig.clone()).collect();

    let tables = read_tables(&args.msa_dir, &located)
        .with_context(|| format!("Failed to read tables from {}", args.msa_dir.display()))?;

    let mut composite = assemble(reference.len(), &spans, &tables)?;
    let mut diagnostics = locate_diagnostics;
    diagnostics.extend(std::mem::take(&mut composite.diagnostics));

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.fasta));
    write_a3m_file(&output, &composite.records)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    let report = AssembleReport {
        reference: &reference.name,
        reference_length: reference.len(),
        composite: &composite,
        diagnostics: &diagnostics,
        output: &output,
    };

    match format {
        OutputFormat::Text => print_text_report(&report),
        OutputFormat::Json => print_json_report(&report)?,
    }

    Ok(())
}

struct AssembleReport<'a> {
    reference: &'a str,
    reference_length: usize,
    composite: &'a Composite,
    diagnostics: &'a Diagnostics,
    output: &'a Path,
}

fn print_text_report(report: &AssembleReport<'_>) {
    let linkers = &report.composite.linkers;

    println!("Assembly Results");
    println!("{}", "=".repeat(60));

    println!("\nReference: {}", report.reference);
    println!("  Length: {}", report.reference_length);

    println!("\nLinkers:");
    println!("  N-terminal: {}", linkers.n_terminal);
    for (i, linker) in linkers.inter.iter().enumerate() {
        println!("  Linker {}: {linker}", i + 1);
    }
    println!("  C-terminal: {}", linkers.c_terminal);

    println!("\nRows: {}", report.composite.records.len());
    println!(
        "  Checksum failures: {}",
        report.diagnostics.checksum_failures()
    );
    println!("\nWritten: {}", report.output.display());

    print_text_diagnostics(report.diagnostics);
}

fn print_json_report(report: &AssembleReport<'_>) -> anyhow::Result<()> {
    let json = serde_json::json!({
        "reference": report.reference,
        "reference_length": report.reference_length,
        "linkers": report.composite.linkers,
        "rows": report.composite.records.len(),
        "checksum_failures": report.diagnostics.checksum_failures(),
        "output": report.output.display().to_string(),
        "diagnostics": report.diagnostics,
    });

    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
