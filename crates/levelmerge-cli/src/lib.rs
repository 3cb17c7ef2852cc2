//! levelmerge-cli: Command-line front end and stage orchestration.

pub mod args;
pub mod config;
pub mod pipeline;

pub use config::{FileConfig, RunConfig};
pub use pipeline::{run, MergeSummary};
