use clap::Parser;
use tracing_subscriber::EnvFilter;

use hybrid_msa::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("hybrid_msa=debug,info")
    } else {
        EnvFilter::new("hybrid_msa=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Extract(args) => {
            cli::extract::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Assemble(args) => {
            cli::assemble::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Replicate(args) => {
            cli::replicate::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
