//! levelmerge-evidence: Evidence overlays that annotate the canonical edge set.
//!
//! Three tab-separated sources are supported:
//! - `CuratedDatabase`: curated interaction database (typed, cited interactions)
//! - `AssociationDatabase`: association-score database (counted as physical evidence)
//! - `MiningTool`: literature-mining output (cited, scored co-mentions)
//!
//! Each overlay updates only edges already present, keyed on the exact ordered
//! pair in the source row.

pub mod tsv;
pub mod curated;
pub mod association;
pub mod mining;

use levelmerge_common::Result;
use levelmerge_graph::EdgeMap;
use serde::Serialize;

pub use association::AssociationDatabase;
pub use curated::{classify_interaction, CuratedDatabase};
pub use mining::MiningTool;

/// Row counters for one overlay pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OverlayStats {
    /// Data rows read (header excluded).
    pub rows: usize,
    /// Rows whose forward pair exists in the edge map.
    pub matched: usize,
    /// Rows whose pair is outside the edge map.
    pub ignored: usize,
    /// Rows with too few columns.
    pub skipped: usize,
}

/// An evidence source that can be overlaid onto an edge map.
pub trait EvidenceSource {
    /// Short name used in logs and summaries.
    fn name(&self) -> &'static str;

    /// Annotate matching edges in place. Never inserts.
    fn apply(&self, edges: &mut EdgeMap) -> Result<OverlayStats>;
}
