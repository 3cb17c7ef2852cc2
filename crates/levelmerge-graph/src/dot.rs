//! Line-oriented reader for graph-description files.
//!
//! Only lines containing the edge arrow are interpreted; graph attributes,
//! braces and comments are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use levelmerge_common::{EdgeKey, MergeError, Result};
use tracing::trace;

use crate::normalise::gene_label;

/// Token separating the two endpoints of an edge statement.
pub const EDGE_ARROW: &str = "->";

/// Parse one line. `Ok(None)` for non-edge lines.
pub fn parse_edge_line(line: &str, path: &Path, line_no: usize) -> Result<Option<EdgeKey>> {
    let Some((left, right)) = line.split_once(EDGE_ARROW) else {
        return Ok(None);
    };

    let label = |token: &str| {
        gene_label(token)
            .map(str::to_string)
            .ok_or_else(|| MergeError::MalformedLabel {
                token: token.trim().to_string(),
                path: path.to_path_buf(),
                line: line_no,
            })
    };

    Ok(Some(EdgeKey::new(label(left)?, label(right)?)))
}

/// Call `visit` for every edge statement in `path`, in file order.
/// Returns the number of edge lines seen.
pub fn for_each_edge<F>(path: &Path, mut visit: F) -> Result<usize>
where
    F: FnMut(EdgeKey),
{
    let file = File::open(path).map_err(|e| MergeError::unreadable(path, e))?;
    let reader = BufReader::new(file);
    let mut n_edges = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| MergeError::unreadable(path, e))?;
        if let Some(key) = parse_edge_line(&line, path, idx + 1)? {
            trace!(edge = %key, line = idx + 1, "edge statement");
            visit(key);
            n_edges += 1;
        }
    }

    Ok(n_edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_non_edge_lines_are_skipped() {
        let path = Path::new("g.dot");
        assert!(parse_edge_line("digraph G {", path, 1).unwrap().is_none());
        assert!(parse_edge_line(r#"  "A" [shape=box];"#, path, 2).unwrap().is_none());
        assert!(parse_edge_line("}", path, 3).unwrap().is_none());
    }

    #[test]
    fn test_edge_line_is_parsed() {
        let key = parse_edge_line(r#"  "KRAS" -> "RAF1" [weight=2];"#, Path::new("g.dot"), 1)
            .unwrap()
            .unwrap();
        assert_eq!(key, EdgeKey::new("KRAS", "RAF1"));
    }

    #[test]
    fn test_unquoted_endpoint_is_fatal() {
        let err = parse_edge_line("KRAS -> \"RAF1\"", Path::new("g.dot"), 7).unwrap_err();
        match err {
            MergeError::MalformedLabel { line, token, .. } => {
                assert_eq!(line, 7);
                assert_eq!(token, "KRAS");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_for_each_edge_visits_in_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "digraph G {{").unwrap();
        writeln!(file, "  \"A\" -> \"B\";").unwrap();
        writeln!(file, "  // comment").unwrap();
        writeln!(file, "  \"B\" -> \"C\";").unwrap();
        writeln!(file, "}}").unwrap();

        let mut seen = Vec::new();
        let n = for_each_edge(file.path(), |key| seen.push(key)).unwrap();
        assert_eq!(n, 2);
        assert_eq!(seen, vec![EdgeKey::new("A", "B"), EdgeKey::new("B", "C")]);
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let err = for_each_edge(&dir.path().join("absent.dot"), |_| {}).unwrap_err();
        assert!(matches!(err, MergeError::UnreadableFile { .. }));
    }
}
