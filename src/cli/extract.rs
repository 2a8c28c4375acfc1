use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::{print_text_diagnostics, validate_contigs, OutputFormat};
use crate::core::diagnostics::Diagnostics;
use crate::core::span::ContigSpan;
use crate::msa::{extractor, filter, locator};
use crate::parsing::a3m::read_msa;
use crate::parsing::tables::write_tables;

#[derive(Args)]
pub struct ExtractArgs {
    /// Reformatted A3M alignment(s); concatenated in order, the first record is the query
    #[arg(long, required = true, num_args = 1..)]
    pub msa: Vec<PathBuf>,

    /// Directory for target_names.txt and the per-contig tables
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Contig sub-sequences of the query
    #[arg(required = true)]
    pub contigs: Vec<String>,
}

/// Execute extract subcommand
///
/// # Errors
///
/// Returns an error if a contig is invalid, an alignment cannot be read, or the
/// tables cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ExtractArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    validate_contigs(&args.contigs)?;

    let msa = read_msa(&args.msa).with_context(|| {
        format!(
            "Failed to read alignment from {}",
            display_paths(&args.msa)
        )
    })?;
    let reference = msa.reference_sequence();

    if verbose {
        eprintln!(
            "Query {} ({} residues), {} targets",
            msa.query.name(),
            reference.len(),
            msa.targets.len()
        );
    }

    let (spans, mut diagnostics) = locator::locate_all(&reference, &args.contigs);
    let (mut tables, extract_diagnostics) = extractor::extract(&msa.targets, &spans, reference.len());
    diagnostics.extend(extract_diagnostics);

    let removed = filter::filter_empty_rows(&mut tables);

    let written = write_tables(&args.out_dir, &tables)
        .with_context(|| format!("Failed to write tables to {}", args.out_dir.display()))?;

    let report = ExtractReport {
        query: msa.query.name(),
        reference_length: reference.len(),
        spans: &spans,
        rows_extracted: msa.targets.len(),
        rows_removed: &removed,
        rows_kept: tables.row_count(),
        written: &written,
        diagnostics: &diagnostics,
    };

    match format {
        OutputFormat::Text => print_text_report(&report),
        OutputFormat::Json => print_json_report(&report)?,
    }

    Ok(())
}

struct ExtractReport<'a> {
    query: &'a str,
    reference_length: usize,
    spans: &'a [ContigSpan],
    rows_extracted: usize,
    rows_removed: &'a [usize],
    rows_kept: usize,
    written: &'a [PathBuf],
    diagnostics: &'a Diagnostics,
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_text_report(report: &ExtractReport<'_>) {
    println!("Extraction Results");
    println!("{}", "=".repeat(60));

    println!("\nQuery: {}", report.query);
    println!("  Length: {}", report.reference_length);

    println!("\nContigs:");
    for span in report.spans {
        println!("  {}\tstart {}\tend {}", span.contig, span.start, span.end);
    }

    println!("\nRows:");
    println!("  Extracted: {}", report.rows_extracted);
    println!("  Removed (all contigs empty): {}", report.rows_removed.len());
    if !report.rows_removed.is_empty() {
        let rows = report
            .rows_removed
            .iter()
            .map(|r| (r + 1).to_string())
            .collect::<Vec<_>>()
            .join(" ");
        println!("    {rows}");
    }
    println!("  Kept: {}", report.rows_kept);

    println!("\nWritten:");
    for path in report.written {
        println!("  {}", path.display());
    }

    print_text_diagnostics(report.diagnostics);
}

fn print_json_report(report: &ExtractReport<'_>) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "query": report.query,
        "reference_length": report.reference_length,
        "spans": report.spans,
        "rows": {
            "extracted": report.rows_extracted,
            "removed": report.rows_removed.iter().map(|r| r + 1).collect::<Vec<_>>(),
            "kept": report.rows_kept,
        },
        "written": report.written.iter().map(|p| p.display().to_string()).collect::<Vec<_>>(),
        "diagnostics": report.diagnostics,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
