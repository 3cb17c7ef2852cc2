//! Command-line arguments for the `levelmerge` binary.

use std::path::PathBuf;

use clap::Parser;

/// Merge a baseline interaction graph with level graphs and evidence sources
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "levelmerge")]
#[command(about = "Merge level graphs and interaction evidence into one edge table")]
#[command(version)]
pub struct Args {
    /// Baseline graph-description file
    #[arg(short, long, env = "LEVELMERGE_GRAPH")]
    pub graph: Option<PathBuf>,

    /// Level file prefix; level N is read from `<prefix>N.<ext>`
    #[arg(short = 'p', long, env = "LEVELMERGE_LEVEL_PREFIX")]
    pub level_prefix: Option<String>,

    /// Level file extension
    #[arg(long, env = "LEVELMERGE_LEVEL_EXT")]
    pub level_ext: Option<String>,

    /// Highest level index to scan (inclusive)
    #[arg(short = 'l', long, env = "LEVELMERGE_MAX_LEVEL")]
    pub max_level: Option<u32>,

    /// Curated interaction database export (tab-separated, with header)
    #[arg(short, long, env = "LEVELMERGE_CURATED")]
    pub curated: Option<PathBuf>,

    /// Association-score database export (tab-separated)
    #[arg(short, long, env = "LEVELMERGE_ASSOCIATION")]
    pub association: Option<PathBuf>,

    /// Literature-mining output (tab-separated)
    #[arg(short, long, env = "LEVELMERGE_MINING")]
    pub mining: Option<PathBuf>,

    /// Destination for the merged edge table
    #[arg(short, long, env = "LEVELMERGE_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Write a JSON run summary to this path
    #[arg(long, env = "LEVELMERGE_SUMMARY")]
    pub summary: Option<PathBuf>,

    /// TOML configuration file supplying defaults for the options above
    #[arg(long, env = "LEVELMERGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
