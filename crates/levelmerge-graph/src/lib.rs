//! levelmerge-graph: Canonical edge set construction, level assignment and record emission.

pub mod normalise;
pub mod dot;
pub mod edge_map;
pub mod levels;
pub mod emit;

pub use edge_map::{build_from_dot, EdgeMap};
pub use emit::{write_records, EmitReport};
pub use levels::{assign_levels, level_path, LevelReport};
