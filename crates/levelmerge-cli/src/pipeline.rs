//! Merge pipeline: baseline parse, level assignment, the three evidence
//! overlays (curated, association, mining, in that order) and emission.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use levelmerge_common::{MergeError, Result};
use levelmerge_evidence::{
    AssociationDatabase, CuratedDatabase, EvidenceSource, MiningTool, OverlayStats,
};
use levelmerge_graph::{
    assign_levels, build_from_dot, write_records, EdgeMap, EmitReport, LevelReport,
};
use serde::Serialize;
use tracing::info;

use crate::config::RunConfig;

/// Outcome of one merge run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MergeSummary {
    /// Directed entries created from the baseline graph.
    pub baseline_edges: usize,
    /// Directed entries in the map after level assignment.
    pub total_edges: usize,
    pub levels: LevelReport,
    pub curated: OverlayStats,
    pub association: OverlayStats,
    pub mining: OverlayStats,
    pub emit: EmitReport,
    /// Wall-clock time per stage, in stage order.
    pub timings_ms: Vec<(String, u128)>,
}

impl MergeSummary {
    /// Write the summary as pretty JSON.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| MergeError::unwritable(path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)
            .map_err(|e| MergeError::unwritable(path, e.into()))?;
        writer.flush().map_err(|e| MergeError::unwritable(path, e))
    }

    fn record_stage(&mut self, stage: &str, started: Instant) {
        let ms = started.elapsed().as_millis();
        info!("Stage {} finished in {} ms", stage, ms);
        self.timings_ms.push((stage.to_string(), ms));
    }
}

/// Run every stage to completion. Any error aborts the run.
pub fn run(config: &RunConfig) -> Result<MergeSummary> {
    let mut summary = MergeSummary::default();

    let started = Instant::now();
    let mut edges = build_from_dot(&config.graph, config.max_level)?;
    summary.baseline_edges = edges.len();
    summary.record_stage("baseline", started);

    let started = Instant::now();
    summary.levels = assign_levels(&mut edges, &config.level_prefix, &config.level_ext)?;
    summary.total_edges = edges.len();
    summary.record_stage("levels", started);

    let stats = overlay(&CuratedDatabase::new(&config.curated), &mut edges, &mut summary)?;
    summary.curated = stats;
    let stats = overlay(&AssociationDatabase::new(&config.association), &mut edges, &mut summary)?;
    summary.association = stats;
    let stats = overlay(&MiningTool::new(&config.mining), &mut edges, &mut summary)?;
    summary.mining = stats;

    let started = Instant::now();
    summary.emit = write_records(&edges, &config.output)?;
    summary.record_stage("emit", started);

    info!(
        "Merge complete: {} directed edges ({} orphans), {} records written",
        summary.total_edges, summary.levels.orphans, summary.emit.emitted
    );
    Ok(summary)
}

fn overlay(
    source: &dyn EvidenceSource,
    edges: &mut EdgeMap,
    summary: &mut MergeSummary,
) -> Result<OverlayStats> {
    let started = Instant::now();
    let stats = source.apply(edges)?;
    summary.record_stage(source.name(), started);
    Ok(stats)
}
