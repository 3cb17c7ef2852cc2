//! Shared tab-separated reader for the evidence sources.

use std::fs::File;
use std::path::Path;

use csv::StringRecord;
use levelmerge_common::{MergeError, Result};

/// Call `visit` for every data row of the tab-separated file at `path`.
/// Rows may have any number of columns; quotes are not interpreted.
/// Returns the number of rows visited.
pub fn for_each_row<F>(path: &Path, has_header: bool, mut visit: F) -> Result<usize>
where
    F: FnMut(&StringRecord),
{
    let file = File::open(path).map_err(|e| MergeError::unreadable(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(has_header)
        .flexible(true)
        .quoting(false)
        .from_reader(file);

    let mut rows = 0usize;
    let mut record = StringRecord::new();
    loop {
        let more = reader
            .read_record(&mut record)
            .map_err(|e| MergeError::Tabular { path: path.to_path_buf(), source: e })?;
        if !more {
            break;
        }
        visit(&record);
        rows += 1;
    }
    Ok(rows)
}

/// Fetch the given columns of `record`, or `None` if any is missing.
pub fn columns<'r, const N: usize>(record: &'r StringRecord, idx: [usize; N]) -> Option<[&'r str; N]> {
    let mut out = [""; N];
    for (slot, i) in out.iter_mut().zip(idx) {
        *slot = record.get(i)?;
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_header_is_skipped_and_rows_are_ragged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("src.tsv");
        fs::write(&path, "h1\th2\th3\na\tb\tc\nd\te\n").unwrap();

        let mut seen = Vec::new();
        let n = for_each_row(&path, true, |r| seen.push(r.len())).unwrap();
        assert_eq!(n, 2);
        assert_eq!(seen, vec![3, 2]);
    }

    #[test]
    fn test_quotes_are_literal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("src.tsv");
        fs::write(&path, "\"A\tB\n").unwrap();

        let mut first = String::new();
        for_each_row(&path, false, |r| first = r[0].to_string()).unwrap();
        assert_eq!(first, "\"A");
    }

    #[test]
    fn test_columns_requires_every_index() {
        let record = StringRecord::from(vec!["a", "b", "c"]);
        assert_eq!(columns(&record, [0, 2]), Some(["a", "c"]));
        assert_eq!(columns(&record, [0, 3]), None);
    }

    #[test]
    fn test_missing_source_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let err = for_each_row(&dir.path().join("nope.tsv"), false, |_| {}).unwrap_err();
        assert!(matches!(err, MergeError::UnreadableFile { .. }));
    }
}
