//! Record emission.
//!
//! One comma-separated row per stored directed edge that at least one evidence
//! source corroborates. No header row; booleans are written as `0`/`1`.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use levelmerge_common::{Edge, EdgeKey, MergeError, Result};
use serde::Serialize;
use tracing::info;

use crate::edge_map::EdgeMap;

/// Counters from one emission pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmitReport {
    pub emitted: usize,
    pub filtered: usize,
}

/// Output row. Field order is the output column order.
#[derive(Debug, Serialize)]
struct EdgeRow<'a> {
    gene1: &'a str,
    gene2: &'a str,
    level: u32,
    genetic_interactions: u32,
    physical_interactions: u32,
    unknown_interactions: u32,
    curated_present: u8,
    curated_citation: &'a str,
    association_present: u8,
    mining_present: u8,
    mining_score: &'a str,
    mining_citation: &'a str,
}

impl<'a> EdgeRow<'a> {
    fn new(key: &'a EdgeKey, edge: &'a Edge) -> Self {
        Self {
            gene1: &key.gene_a,
            gene2: &key.gene_b,
            level: edge.level,
            genetic_interactions: edge.genetic_interactions,
            physical_interactions: edge.physical_interactions,
            unknown_interactions: edge.unknown_interactions,
            curated_present: edge.curated_present.into(),
            curated_citation: &edge.curated_citation,
            association_present: edge.association_present.into(),
            mining_present: edge.mining_present.into(),
            mining_score: &edge.mining_score,
            mining_citation: &edge.mining_citation,
        }
    }
}

/// Write corroborated edges to `path`, replacing any existing file.
pub fn write_records(edges: &EdgeMap, path: &Path) -> Result<EmitReport> {
    let file = File::create(path).map_err(|e| MergeError::unwritable(path, e))?;
    let report = write_records_to(edges, file).map_err(|e| MergeError::unwritable(path, e))?;

    info!(
        "Wrote {} records to {:?} ({} uncorroborated edges filtered)",
        report.emitted, path, report.filtered
    );
    Ok(report)
}

/// Write corroborated edges to any writer.
pub fn write_records_to<W: Write>(edges: &EdgeMap, writer: W) -> io::Result<EmitReport> {
    let mut out = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    let mut report = EmitReport::default();

    for (key, edge) in edges.iter() {
        if !edge.is_corroborated() {
            report.filtered += 1;
            continue;
        }
        out.serialize(EdgeRow::new(key, edge))?;
        report.emitted += 1;
    }

    out.flush()?;
    Ok(report)
}
