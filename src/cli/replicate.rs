use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;

use crate::cli::{print_text_diagnostics, OutputFormat};
use crate::core::types::Cardinality;
use crate::msa::replicator::replicate;
use crate::parsing::a3m::read_text;
use crate::parsing::fasta::{fasta_stem, parse_fasta_file};

#[derive(Args)]
pub struct ReplicateArgs {
    /// FASTA with one record per chain
    #[arg(long, required = true)]
    pub fasta: PathBuf,

    /// Composite A3M appended below the self-pairs
    #[arg(long, required = true)]
    pub a3m: PathBuf,

    /// Oligomeric state: monomer, homodimer, homotrimer or homotetramer
    #[arg(short, long, required = true)]
    pub cardinality: String,

    /// Output directory (default: next to the FASTA)
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,
}

/// Execute replicate subcommand
///
/// # Errors
///
/// Returns an error if the FASTA or A3M cannot be read or an output file cannot
/// be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ReplicateArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let records = parse_fasta_file(&args.fasta)
        .with_context(|| format!("Failed to read records from {}", args.fasta.display()))?;
    let body = read_text(&args.a3m)
        .with_context(|| format!("Failed to read alignment from {}", args.a3m.display()))?;
    let cardinality = Cardinality::parse(&args.cardinality);

    if verbose {
        eprintln!(
            "{} record(s), cardinality {cardinality}, {} byte body",
            records.len(),
            body.len()
        );
    }

    let out_dir = match &args.out_dir {
        Some(dir) => dir.clone(),
        None => args
            .fasta
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf),
    };
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let (outputs, diagnostics) = replicate(&fasta_stem(&args.fasta), &records, &body, &cardinality);

    let mut written = Vec::with_capacity(outputs.len());
    for output in &outputs {
        let path = output.path_in(&out_dir);
        std::fs::write(&path, &output.contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        written.push(path);
    }

    match format {
        OutputFormat::Text => {
            println!("Replication Results");
            println!("{}", "=".repeat(60));
            println!("\nCardinality: {cardinality}");
            match cardinality.copy_count() {
                Some(copies) => println!("  Copies: {copies}"),
                None => println!("  Copies: unknown (no cardinality header)"),
            }
            println!("\nWritten:");
            for path in &written {
                println!("  {}", path.display());
            }
            print_text_diagnostics(&diagnostics);
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "cardinality": cardinality.to_string(),
                "copies": cardinality.copy_count(),
                "written": written.iter().map(|p| p.display().to_string()).collect::<Vec<_>>(),
                "diagnostics": diagnostics,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(())
}
