//! Configuration loading for levelmerge.
//! Reads an optional TOML file and merges it under the command-line flags.

use std::path::{Path, PathBuf};

use levelmerge_common::{MergeError, Result};
use serde::{Deserialize, Serialize};

use crate::args::Args;


/// On-disk configuration. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub inputs: InputsConfig,
    #[serde(default)]
    pub levels: LevelsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputsConfig {
    pub graph: Option<PathBuf>,
    pub curated: Option<PathBuf>,
    pub association: Option<PathBuf>,
    pub mining: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelsConfig {
    pub prefix: Option<String>,
    #[serde(default = "default_level_ext")]
    pub ext: String,
    pub max_level: Option<u32>,
}

impl Default for LevelsConfig {
    fn default() -> Self {
        Self {
            prefix: None,
            ext: default_level_ext(),
            max_level: None,
        }
    }
}

fn default_level_ext() -> String { "dot".to_string() }

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<PathBuf>,
    pub summary: Option<PathBuf>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| MergeError::unreadable(path, e))?;
        Self::from_toml_str(&content)
            .map_err(|e| MergeError::Config(format!("{}: {e}", path.display())))
    }

    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Fully resolved inputs for one merge run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunConfig {
    pub graph: PathBuf,
    pub level_prefix: String,
    pub level_ext: String,
    pub max_level: u32,
    pub curated: PathBuf,
    pub association: PathBuf,
    pub mining: PathBuf,
    pub output: PathBuf,
    pub summary: Option<PathBuf>,
}

impl RunConfig {
    /// Merge command-line flags over file values. Flags win.
    pub fn resolve(args: &Args, file: FileConfig) -> Result<Self> {
        fn required<T>(value: Option<T>, name: &str) -> Result<T> {
            value.ok_or_else(|| MergeError::Config(format!("missing required setting `{name}`")))
        }

        let FileConfig { inputs, levels, output } = file;

        let max_level = required(args.max_level.or(levels.max_level), "max_level")?;
        if max_level == u32::MAX {
            return Err(MergeError::Config(format!(
                "max_level must be below {}",
                u32::MAX
            )));
        }

        Ok(Self {
            graph: required(args.graph.clone().or(inputs.graph), "graph")?,
            level_prefix: required(args.level_prefix.clone().or(levels.prefix), "level_prefix")?,
            level_ext: args.level_ext.clone().unwrap_or(levels.ext),
            max_level,
            curated: required(args.curated.clone().or(inputs.curated), "curated")?,
            association: required(args.association.clone().or(inputs.association), "association")?,
            mining: required(args.mining.clone().or(inputs.mining), "mining")?,
            output: required(args.output.clone().or(output.path), "output")?,
            summary: args.summary.clone().or(output.summary),
        })
    }

    /// Load the configuration file named by `args` (if any) and resolve.
    pub fn from_args(args: &Args) -> Result<Self> {
        let file = match &args.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Self::resolve(args, file)
    }
}
