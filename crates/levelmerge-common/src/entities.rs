//! Edge types shared by the graph builder, the evidence overlays and the emitter.
//! An edge is stored once per direction; both entries are independent records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder for citations and scores that no source has supplied.
pub const NOT_AVAILABLE: &str = "NA";

// ---------------------------------------------------------------------------
// Edge key
// ---------------------------------------------------------------------------

/// Directed gene pair. `(a, b)` and `(b, a)` are distinct keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeKey {
    pub gene_a: String,
    pub gene_b: String,
}

impl EdgeKey {
    pub fn new(gene_a: impl Into<String>, gene_b: impl Into<String>) -> Self {
        Self {
            gene_a: gene_a.into(),
            gene_b: gene_b.into(),
        }
    }

    /// The same pair in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self {
            gene_a: self.gene_b.clone(),
            gene_b: self.gene_a.clone(),
        }
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.gene_a, self.gene_b)
    }
}

// ---------------------------------------------------------------------------
// Interaction category
// ---------------------------------------------------------------------------

/// Evidence bucket an interaction-type label resolves to.
/// Discriminants are the category codes used by the curated database table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum InteractionCategory {
    Genetic = 0,
    Physical = 1,
    Unknown = 4,
}

impl InteractionCategory {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionCategory::Genetic => "genetic",
            InteractionCategory::Physical => "physical",
            InteractionCategory::Unknown => "unknown",
        }
    }
}

// ---------------------------------------------------------------------------
// Edge
// ---------------------------------------------------------------------------

/// Annotations carried by one directed edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Discovery level; `max_level + 1` until a level file reports the edge.
    pub level: u32,
    pub genetic_interactions: u32,
    pub physical_interactions: u32,
    pub unknown_interactions: u32,
    pub curated_present: bool,
    pub curated_citation: String,
    pub association_present: bool,
    pub mining_present: bool,
    pub mining_citation: String,
    pub mining_score: String,
}

impl Edge {
    /// A fresh edge with no evidence attached.
    pub fn with_level(level: u32) -> Self {
        Self {
            level,
            genetic_interactions: 0,
            physical_interactions: 0,
            unknown_interactions: 0,
            curated_present: false,
            curated_citation: NOT_AVAILABLE.to_string(),
            association_present: false,
            mining_present: false,
            mining_citation: NOT_AVAILABLE.to_string(),
            mining_score: NOT_AVAILABLE.to_string(),
        }
    }

    /// Increment exactly the tally matching `category`.
    pub fn tally(&mut self, category: InteractionCategory) {
        match category {
            InteractionCategory::Genetic => self.genetic_interactions += 1,
            InteractionCategory::Physical => self.physical_interactions += 1,
            InteractionCategory::Unknown => self.unknown_interactions += 1,
        }
    }

    /// True when at least one evidence source reported this edge.
    pub fn is_corroborated(&self) -> bool {
        self.curated_present || self.association_present || self.mining_present
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_edge_has_defaults() {
        let edge = Edge::with_level(4);
        assert_eq!(edge.level, 4);
        assert_eq!(edge.curated_citation, "NA");
        assert_eq!(edge.mining_citation, "NA");
        assert_eq!(edge.mining_score, "NA");
        assert!(!edge.is_corroborated());
    }

    #[test]
    fn test_tally_touches_one_bucket() {
        let mut edge = Edge::with_level(1);
        edge.tally(InteractionCategory::Physical);
        assert_eq!(
            (edge.genetic_interactions, edge.physical_interactions, edge.unknown_interactions),
            (0, 1, 0)
        );
        edge.tally(InteractionCategory::Unknown);
        edge.tally(InteractionCategory::Genetic);
        assert_eq!(
            (edge.genetic_interactions, edge.physical_interactions, edge.unknown_interactions),
            (1, 1, 1)
        );
    }

    #[test]
    fn test_any_single_flag_corroborates() {
        let mut edge = Edge::with_level(0);
        edge.mining_present = true;
        assert!(edge.is_corroborated());
    }

    #[test]
    fn test_category_codes() {
        assert_eq!(InteractionCategory::Genetic.code(), 0);
        assert_eq!(InteractionCategory::Physical.code(), 1);
        assert_eq!(InteractionCategory::Unknown.code(), 4);
    }

    #[test]
    fn test_key_reversal_and_display() {
        let key = EdgeKey::new("KRAS", "RAF1");
        assert_eq!(key.reversed(), EdgeKey::new("RAF1", "KRAS"));
        assert_eq!(key.to_string(), "KRAS->RAF1");
    }
}
