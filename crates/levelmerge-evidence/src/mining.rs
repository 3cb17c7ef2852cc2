//! Literature-mining overlay.
//!
//! Headerless tab-separated rows: gene A, gene B, citation, confidence score,
//! then unused columns. A matching row counts as unknown-type evidence and
//! overwrites the edge's citation and score.

use std::path::PathBuf;

use levelmerge_common::{EdgeKey, Result};
use levelmerge_graph::EdgeMap;
use tracing::{debug, info};

use crate::tsv::{columns, for_each_row};
use crate::{EvidenceSource, OverlayStats};

/// Literature-mining tool output.
#[derive(Debug, Clone)]
pub struct MiningTool {
    pub path: PathBuf,
}

impl MiningTool {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl EvidenceSource for MiningTool {
    fn name(&self) -> &'static str {
        "mining"
    }

    fn apply(&self, edges: &mut EdgeMap) -> Result<OverlayStats> {
        let mut stats = OverlayStats::default();

        stats.rows = for_each_row(&self.path, false, |record| {
            let Some([gene_a, gene_b, citation, score]) = columns(record, [0, 1, 2, 3]) else {
                debug!("Skipping short mining row with {} columns", record.len());
                stats.skipped += 1;
                return;
            };

            let Some(edge) = edges.get_mut(&EdgeKey::new(gene_a, gene_b)) else {
                stats.ignored += 1;
                return;
            };

            edge.mining_present = true;
            edge.unknown_interactions += 1;
            edge.mining_citation = citation.to_string();
            edge.mining_score = score.to_string();
            stats.matched += 1;
        })?;

        info!(
            "Mining overlay {:?}: {} rows, {} matched, {} outside graph, {} skipped",
            self.path, stats.rows, stats.matched, stats.ignored, stats.skipped
        );
        Ok(stats)
    }
}
