//! Association-score database overlay.
//!
//! Headerless tab-separated rows: gene A, gene B, interaction label, then
//! columns this overlay does not read. Every matching row counts as physical
//! evidence whatever its label says.

use std::path::PathBuf;

use levelmerge_common::{EdgeKey, Result};
use levelmerge_graph::EdgeMap;
use tracing::{debug, info, trace};

use crate::tsv::{columns, for_each_row};
use crate::{EvidenceSource, OverlayStats};

/// Association-score database export.
#[derive(Debug, Clone)]
pub struct AssociationDatabase {
    pub path: PathBuf,
}

impl AssociationDatabase {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl EvidenceSource for AssociationDatabase {
    fn name(&self) -> &'static str {
        "association"
    }

    fn apply(&self, edges: &mut EdgeMap) -> Result<OverlayStats> {
        let mut stats = OverlayStats::default();

        stats.rows = for_each_row(&self.path, false, |record| {
            let Some([gene_a, gene_b]) = columns(record, [0, 1]) else {
                debug!("Skipping short association row with {} columns", record.len());
                stats.skipped += 1;
                return;
            };

            let key = EdgeKey::new(gene_a, gene_b);
            let Some(edge) = edges.get_mut(&key) else {
                stats.ignored += 1;
                return;
            };

            trace!(edge = %key, label = record.get(2).unwrap_or(""), "association match");
            edge.association_present = true;
            edge.physical_interactions += 1;
            stats.matched += 1;
        })?;

        info!(
            "Association overlay {:?}: {} rows, {} matched, {} outside graph, {} skipped",
            self.path, stats.rows, stats.matched, stats.ignored, stats.skipped
        );
        Ok(stats)
    }
}
