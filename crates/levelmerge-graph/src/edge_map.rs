//! The canonical edge set.
//!
//! Every edge is held in both directions as two independent entries. Entries
//! are created by the baseline parse or by orphan discovery and never removed.

use std::collections::BTreeMap;
use std::path::Path;

use levelmerge_common::{Edge, EdgeKey, MergeError, Result};
use tracing::info;

use crate::dot::for_each_edge;

/// Ordered map from directed gene pair to its annotations.
#[derive(Debug, Clone)]
pub struct EdgeMap {
    edges: BTreeMap<EdgeKey, Edge>,
    max_level: u32,
}

impl EdgeMap {
    /// Fails when `max_level + 1` does not fit in a level.
    pub fn new(max_level: u32) -> Result<Self> {
        if max_level.checked_add(1).is_none() {
            return Err(MergeError::Config(format!(
                "max level {max_level} leaves no room for the sentinel level"
            )));
        }
        Ok(Self {
            edges: BTreeMap::new(),
            max_level,
        })
    }

    pub fn max_level(&self) -> u32 {
        self.max_level
    }

    /// Level carried by edges that no level file has reported yet.
    pub fn sentinel_level(&self) -> u32 {
        self.max_level + 1
    }

    /// Insert `key` and its reverse with default annotations, leaving any
    /// direction that already exists untouched. Returns the number of new entries.
    pub fn insert_pair(&mut self, key: &EdgeKey) -> usize {
        let sentinel = self.sentinel_level();
        let mut inserted = 0;
        for k in [key.clone(), key.reversed()] {
            if !self.edges.contains_key(&k) {
                self.edges.insert(k, Edge::with_level(sentinel));
                inserted += 1;
            }
        }
        inserted
    }

    pub fn contains(&self, key: &EdgeKey) -> bool {
        self.edges.contains_key(key)
    }

    pub fn get(&self, key: &EdgeKey) -> Option<&Edge> {
        self.edges.get(key)
    }

    pub fn get_mut(&mut self, key: &EdgeKey) -> Option<&mut Edge> {
        self.edges.get_mut(key)
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&EdgeKey, &Edge)> {
        self.edges.iter()
    }

    /// Number of directed entries.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Build the canonical edge set from the baseline graph description.
pub fn build_from_dot(path: &Path, max_level: u32) -> Result<EdgeMap> {
    let mut map = EdgeMap::new(max_level)?;
    let n_lines = for_each_edge(path, |key| {
        map.insert_pair(&key);
    })?;

    info!(
        "Baseline graph {:?}: {} edge lines, {} directed edges",
        path,
        n_lines,
        map.len()
    );
    Ok(map)
}
