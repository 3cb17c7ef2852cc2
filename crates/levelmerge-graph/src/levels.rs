//! Level assignment from the incremental graph files.
//!
//! Level files `<prefix>0.<ext>` .. `<prefix><max_level>.<ext>` are scanned in
//! increasing order. An edge keeps the first level it is observed at. Only the
//! forward key of each statement is examined, so a reverse entry stays at the
//! sentinel unless its own statement appears in some level file.

use std::path::{Path, PathBuf};

use levelmerge_common::{EdgeKey, Result};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::dot::for_each_edge;
use crate::edge_map::EdgeMap;

/// Counters from one level-assignment pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LevelReport {
    /// Edge statements read across all level files.
    pub statements: usize,
    /// Edges absent from the baseline graph that were synthesised.
    pub orphans: usize,
    /// Entries moved off the sentinel level.
    pub assigned: usize,
}

/// Path of the level file for `level`.
pub fn level_path(prefix: &str, level: u32, ext: &str) -> PathBuf {
    PathBuf::from(format!("{prefix}{level}.{ext}"))
}

/// Assign discovery levels to `edges`, synthesising orphans on the way.
/// Every level file in `0..=max_level` must exist.
pub fn assign_levels(edges: &mut EdgeMap, prefix: &str, ext: &str) -> Result<LevelReport> {
    let mut report = LevelReport::default();

    for level in 0..=edges.max_level() {
        let path = level_path(prefix, level, ext);
        let before = report.assigned;
        let n = scan_level(edges, &path, level, &mut report)?;
        report.statements += n;
        debug!(
            "Level {} ({:?}): {} statements, {} newly assigned",
            level,
            path,
            n,
            report.assigned - before
        );
    }

    info!(
        "Level assignment: {} statements, {} assigned, {} orphans",
        report.statements, report.assigned, report.orphans
    );
    Ok(report)
}

fn scan_level(edges: &mut EdgeMap, path: &Path, level: u32, report: &mut LevelReport) -> Result<usize> {
    let sentinel = edges.sentinel_level();
    for_each_edge(path, |key: EdgeKey| {
        if !edges.contains(&key) {
            warn!(edge = %key, level_index = level, "Edge not in baseline graph; adding it");
            edges.insert_pair(&key);
            report.orphans += 1;
        }
        if let Some(edge) = edges.get_mut(&key) {
            if edge.level == sentinel {
                edge.level = level;
                report.assigned += 1;
            }
        }
    })
}
