//! Curated interaction database overlay.
//!
//! The export is a tab-separated table with one header row. Columns used:
//!   7  official symbol, interactor A
//!   8  official symbol, interactor B
//!   12 experimental system / interaction type
//!   14 citation (PubMed identifier)
//!
//! The interaction type is resolved through a closed table to one of the three
//! evidence buckets; unrecognised labels count as unknown.

use std::path::PathBuf;

use levelmerge_common::{EdgeKey, InteractionCategory, Result};
use levelmerge_graph::EdgeMap;
use tracing::{debug, info, trace};

use crate::tsv::{columns, for_each_row};
use crate::{EvidenceSource, OverlayStats};

const COL_GENE_A: usize = 7;
const COL_GENE_B: usize = 8;
const COL_TYPE: usize = 12;
const COL_CITATION: usize = 14;

/// Experimental systems backed by direct biochemical or structural evidence.
const PHYSICAL_SYSTEMS: &[&str] = &[
    "physical",
    "Affinity Capture-Luminescence",
    "Affinity Capture-MS",
    "Affinity Capture-RNA",
    "Affinity Capture-Western",
    "Biochemical Activity",
    "Co-crystal Structure",
    "Co-fractionation",
    "Co-localization",
    "Co-purification",
    "Cross-Linking-MS (XL-MS)",
    "Far Western",
    "FRET",
    "PCA",
    "Protein-peptide",
    "Protein-RNA",
    "Proximity Label-MS",
    "Reconstituted Complex",
    "Two-hybrid",
];

/// Experimental systems backed by genetic or phenotypic evidence.
const GENETIC_SYSTEMS: &[&str] = &[
    "genetic",
    "Dosage Growth Defect",
    "Dosage Lethality",
    "Dosage Rescue",
    "Negative Genetic",
    "Phenotypic Enhancement",
    "Phenotypic Suppression",
    "Positive Genetic",
    "Synthetic Growth Defect",
    "Synthetic Haploinsufficiency",
    "Synthetic Lethality",
    "Synthetic Rescue",
];

/// Resolve an interaction-type label to its evidence bucket.
pub fn classify_interaction(label: &str) -> InteractionCategory {
    let label = label.trim();
    if PHYSICAL_SYSTEMS.contains(&label) {
        InteractionCategory::Physical
    } else if GENETIC_SYSTEMS.contains(&label) {
        InteractionCategory::Genetic
    } else {
        InteractionCategory::Unknown
    }
}

/// Curated interaction database export.
#[derive(Debug, Clone)]
pub struct CuratedDatabase {
    pub path: PathBuf,
}

impl CuratedDatabase {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl EvidenceSource for CuratedDatabase {
    fn name(&self) -> &'static str {
        "curated"
    }

    fn apply(&self, edges: &mut EdgeMap) -> Result<OverlayStats> {
        let mut stats = OverlayStats::default();

        stats.rows = for_each_row(&self.path, true, |record| {
            let Some([gene_a, gene_b, label, citation]) =
                columns(record, [COL_GENE_A, COL_GENE_B, COL_TYPE, COL_CITATION])
            else {
                debug!("Skipping short curated row with {} columns", record.len());
                stats.skipped += 1;
                return;
            };

            let key = EdgeKey::new(gene_a, gene_b);
            let Some(edge) = edges.get_mut(&key) else {
                stats.ignored += 1;
                return;
            };

            edge.curated_present = true;
            edge.curated_citation = citation.to_string();
            let category = classify_interaction(label);
            trace!(edge = %key, category = category.as_str(), "curated match");
            edge.tally(category);
            stats.matched += 1;
        })?;

        info!(
            "Curated overlay {:?}: {} rows, {} matched, {} outside graph, {} skipped",
            self.path, stats.rows, stats.matched, stats.ignored, stats.skipped
        );
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    const HEADER: &str = "#ID\tEntrezA\tEntrezB\tIdA\tIdB\tSysA\tSysB\tSymbolA\tSymbolB\tSynA\tSynB\tSystem\tType\tAuthor\tPubmed";

    fn row(a: &str, b: &str, label: &str, pmid: &str) -> String {
        format!("1\t10\t11\t100\t101\t-\t-\t{a}\t{b}\t-\t-\tsys\t{label}\tDoe\t{pmid}")
    }

    fn source(rows: &[String]) -> (tempfile::TempDir, CuratedDatabase) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("curated.tab");
        fs::write(&path, format!("{HEADER}\n{}\n", rows.join("\n"))).unwrap();
        (dir, CuratedDatabase::new(path))
    }

    #[test]
    fn test_classify_interaction() {
        assert_eq!(classify_interaction("Two-hybrid"), InteractionCategory::Physical);
        assert_eq!(classify_interaction("physical"), InteractionCategory::Physical);
        assert_eq!(classify_interaction("Synthetic Lethality"), InteractionCategory::Genetic);
        assert_eq!(classify_interaction(" genetic "), InteractionCategory::Genetic);
        assert_eq!(classify_interaction("unknown"), InteractionCategory::Unknown);
        assert_eq!(classify_interaction("Telepathy"), InteractionCategory::Unknown);
    }

    #[test]
    fn test_physical_row_increments_only_physical() {
        let mut map = EdgeMap::new(0).unwrap();
        map.insert_pair(&EdgeKey::new("A", "B"));
        let (_dir, src) = source(&[row("A", "B", "Two-hybrid", "PMID123")]);

        let stats = src.apply(&mut map).unwrap();

        let edge = map.get(&EdgeKey::new("A", "B")).unwrap();
        assert!(edge.curated_present);
        assert_eq!(edge.curated_citation, "PMID123");
        assert_eq!(
            (edge.genetic_interactions, edge.physical_interactions, edge.unknown_interactions),
            (0, 1, 0)
        );
        assert_eq!(stats.matched, 1);
    }

    #[test]
    fn test_reverse_entry_is_untouched() {
        let mut map = EdgeMap::new(0).unwrap();
        map.insert_pair(&EdgeKey::new("A", "B"));
        let (_dir, src) = source(&[row("A", "B", "Dosage Rescue", "1")]);

        src.apply(&mut map).unwrap();

        let rev = map.get(&EdgeKey::new("B", "A")).unwrap();
        assert!(!rev.curated_present);
        assert_eq!(rev.genetic_interactions, 0);
    }

    #[test]
    fn test_rows_outside_graph_are_ignored() {
        let mut map = EdgeMap::new(0).unwrap();
        map.insert_pair(&EdgeKey::new("A", "B"));
        let (_dir, src) = source(&[row("A", "Z", "FRET", "9"), "too\tshort".to_string()]);

        let stats = src.apply(&mut map).unwrap();

        assert_eq!(map.len(), 2);
        assert_eq!(stats, OverlayStats { rows: 2, matched: 0, ignored: 1, skipped: 1 });
    }

    #[test]
    fn test_last_citation_wins_and_tallies_accumulate() {
        let mut map = EdgeMap::new(0).unwrap();
        map.insert_pair(&EdgeKey::new("A", "B"));
        let (_dir, src) = source(&[
            row("A", "B", "Two-hybrid", "111"),
            row("A", "B", "Negative Genetic", "222"),
            row("A", "B", "unknown", "333"),
        ]);

        src.apply(&mut map).unwrap();

        let edge = map.get(&EdgeKey::new("A", "B")).unwrap();
        assert_eq!(edge.curated_citation, "333");
        assert_eq!(
            (edge.genetic_interactions, edge.physical_interactions, edge.unknown_interactions),
            (1, 1, 1)
        );
    }
}
