//! levelmerge: merge level graphs and interaction evidence into one edge table.
//! Entry point for the command-line binary.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use levelmerge_cli::args::Args;
use levelmerge_cli::{pipeline, RunConfig};

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = match args.verbose {
        0 => "levelmerge=info,warn",
        1 => "levelmerge=debug,info",
        _ => "levelmerge=trace,debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("levelmerge {}", env!("CARGO_PKG_VERSION"));

    let config = RunConfig::from_args(&args).context("Could not resolve run configuration")?;
    info!(
        "Baseline {:?}, levels {}0..={}.{}, output {:?}",
        config.graph, config.level_prefix, config.max_level, config.level_ext, config.output
    );

    let summary = pipeline::run(&config).context("Merge run failed")?;

    if let Some(path) = &config.summary {
        summary
            .write_json(path)
            .with_context(|| format!("Failed to write run summary to {}", path.display()))?;
        info!("Run summary written to {:?}", path);
    }

    Ok(())
}
