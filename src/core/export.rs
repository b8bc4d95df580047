// LineSift - core/export.rs
//
// CSV and JSON export of filtered results.
// Core layer: writes to any Write trait object.

use crate::core::model::MatchedLine;
use crate::util::constants::MAX_EXPORT_LINES;
use crate::util::error::ExportError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Everything written by a JSON export.
#[derive(Debug, Serialize)]
pub struct ExportReport<'a> {
    /// File the results were filtered from.
    pub source: &'a Path,

    /// Term the lines were filtered by.
    pub term: &'a str,

    pub exported_at: DateTime<Utc>,

    pub matches: &'a [MatchedLine],
}

/// Refuse exports larger than `MAX_EXPORT_LINES`.
pub fn check_size(count: usize) -> Result<(), ExportError> {
    if count > MAX_EXPORT_LINES {
        return Err(ExportError::TooManyLines {
            count,
            max: MAX_EXPORT_LINES,
        });
    }
    Ok(())
}

/// Open `dest` for an export of `count` lines.
///
/// The size check runs before the file is created, so a refused export
/// never truncates an existing file.
pub fn create_export_file(dest: &Path, count: usize) -> Result<BufWriter<File>, ExportError> {
    check_size(count)?;
    let file = File::create(dest).map_err(|e| ExportError::Io {
        path: dest.to_path_buf(),
        source: e,
    })?;
    Ok(BufWriter::new(file))
}

/// Export matched lines to CSV format.
///
/// Writes: line, text
pub fn export_csv<W: Write>(
    matches: &[MatchedLine],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    check_size(matches.len())?;

    let mut csv_writer = csv::Writer::from_writer(writer);
    let csv_err = |e: csv::Error| ExportError::Csv {
        path: export_path.to_path_buf(),
        source: e,
    };

    csv_writer.write_record(["line", "text"]).map_err(csv_err)?;

    for m in matches {
        csv_writer
            .write_record([m.line_number.to_string().as_str(), m.text.as_str()])
            .map_err(csv_err)?;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(matches.len())
}

/// Export a results report to pretty-printed JSON.
pub fn export_json<W: Write>(
    report: &ExportReport<'_>,
    mut writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    check_size(report.matches.len())?;

    serde_json::to_writer_pretty(&mut writer, report).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    // A buffered writer only reports its final write errors on flush.
    writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(report.matches.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    /// Writer that rejects every write and flush, like a full disk.
    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "no space left on device"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::Other, "no space left on device"))
        }
    }

    fn make_match(line_number: usize, text: &str) -> MatchedLine {
        MatchedLine {
            line_number,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_csv_export() {
        let matches = vec![make_match(1, "apple"), make_match(3, "apple, sauce")];
        let mut buf = Vec::new();
        let count = export_csv(&matches, &mut buf, Path::new("out.csv")).unwrap();
        assert_eq!(count, 2);

        let output = String::from_utf8(buf).unwrap();
        let rows: Vec<&str> = output.lines().collect();
        assert_eq!(rows[0], "line,text");
        assert_eq!(rows[1], "1,apple");
        // Embedded comma forces quoting.
        assert_eq!(rows[2], "3,\"apple, sauce\"");
    }

    #[test]
    fn test_json_export() {
        let matches = vec![make_match(2, "banana split")];
        let source = PathBuf::from("fruit.txt");
        let report = ExportReport {
            source: &source,
            term: "split",
            exported_at: Utc::now(),
            matches: &matches,
        };
        let mut buf = Vec::new();
        let count = export_json(&report, &mut buf, Path::new("out.json")).unwrap();
        assert_eq!(count, 1);

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["term"], "split");
        assert_eq!(value["source"], "fruit.txt");
        assert_eq!(value["matches"][0]["line_number"], 2);
        assert_eq!(value["matches"][0]["text"], "banana split");
        assert!(value["exported_at"].is_string());
    }

    #[test]
    fn test_csv_export_empty_writes_header_only() {
        let mut buf = Vec::new();
        let count = export_csv(&[], &mut buf, Path::new("out.csv")).unwrap();
        assert_eq!(count, 0);
        assert_eq!(String::from_utf8(buf).unwrap(), "line,text\n");
    }

    #[test]
    fn test_json_export_reports_buffered_write_failure() {
        let matches = vec![make_match(1, "apple")];
        let source = PathBuf::from("fruit.txt");
        let report = ExportReport {
            source: &source,
            term: "apple",
            exported_at: Utc::now(),
            matches: &matches,
        };
        let result = export_json(&report, BufWriter::new(FullDisk), Path::new("out.json"));
        assert!(
            matches!(result, Err(ExportError::Io { .. })),
            "expected Io error, got {result:?}"
        );
    }

    #[test]
    fn test_csv_export_reports_buffered_write_failure() {
        let matches = vec![make_match(1, "apple")];
        let result = export_csv(&matches, BufWriter::new(FullDisk), Path::new("out.csv"));
        assert!(result.is_err());
    }

    #[test]
    fn test_oversized_export_leaves_existing_file_intact() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("results.csv");
        std::fs::write(&dest, "previous results\n").unwrap();

        let result = create_export_file(&dest, MAX_EXPORT_LINES + 1);
        assert!(matches!(result, Err(ExportError::TooManyLines { .. })));
        assert_eq!(
            std::fs::read_to_string(&dest).unwrap(),
            "previous results\n"
        );
    }

    #[test]
    fn test_create_export_file_within_limit() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("results.csv");
        let writer = create_export_file(&dest, 1).unwrap();
        let n = export_csv(&[make_match(1, "apple")], writer, &dest).unwrap();
        assert_eq!(n, 1);
        assert_eq!(std::fs::read_to_string(&dest).unwrap(), "line,text\n1,apple\n");
    }
}
