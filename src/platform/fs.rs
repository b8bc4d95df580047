// LineSift - platform/fs.rs
//
// File reading. Each call opens the file, consumes it fully and closes it
// before returning; no handle outlives the call.

use crate::core::lines::split_lines;
use crate::util::error::LoadError;
use std::io::Read;
use std::path::Path;

/// Read a whole file and split it into lines.
///
/// Fails with `LoadError::FileTooLarge` when the file is bigger than
/// `max_bytes`, and with `LoadError::InvalidEncoding` when the content is
/// not UTF-8.
pub fn read_lines(path: &Path, max_bytes: u64) -> Result<Vec<String>, LoadError> {
    let io_err = |source: std::io::Error| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = std::fs::File::open(path).map_err(io_err)?;
    let metadata = file.metadata().map_err(io_err)?;
    if metadata.len() > max_bytes {
        return Err(LoadError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size: max_bytes,
        });
    }

    let mut bytes = Vec::with_capacity(metadata.len() as usize);
    // The file may grow after the metadata call; one byte past the cap is
    // enough to tell. Reading a directory handle fails here on Unix.
    file.by_ref()
        .take(max_bytes.saturating_add(1))
        .read_to_end(&mut bytes)
        .map_err(io_err)?;
    if bytes.len() as u64 > max_bytes {
        return Err(LoadError::FileTooLarge {
            path: path.to_path_buf(),
            size: file.metadata().map_or(bytes.len() as u64, |m| m.len()),
            max_size: max_bytes,
        });
    }

    let text = String::from_utf8(bytes).map_err(|source| LoadError::InvalidEncoding {
        path: path.to_path_buf(),
        source,
    })?;

    let lines = split_lines(&text);
    tracing::debug!(
        path = %path.display(),
        bytes = text.len(),
        lines = lines.len(),
        "File read"
    );
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_reads_lines() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        write!(tmp, "apple\nbanana\r\napplesauce\n").unwrap();
        let lines = read_lines(tmp.path(), 1024).unwrap();
        assert_eq!(lines, vec!["apple", "banana", "applesauce"]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_lines(&dir.path().join("nope.txt"), 1024);
        assert!(
            matches!(result, Err(LoadError::Io { .. })),
            "expected Io, got {result:?}"
        );
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(&[b'o', b'k', b'\n', 0xff, 0xfe]).unwrap();
        let result = read_lines(tmp.path(), 1024);
        assert!(matches!(result, Err(LoadError::InvalidEncoding { .. })));
    }

    #[test]
    fn test_size_cap_enforced() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(&[b'x'; 64]).unwrap();
        let result = read_lines(tmp.path(), 10);
        assert!(matches!(
            result,
            Err(LoadError::FileTooLarge {
                size: 64,
                max_size: 10,
                ..
            })
        ));
    }

    #[test]
    fn test_file_grown_past_cap_rejected() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(b"0123456789").unwrap();
        assert!(read_lines(tmp.path(), 10).is_ok());

        // Bytes appended through a second handle after the first read.
        let mut grower = std::fs::OpenOptions::new()
            .append(true)
            .open(tmp.path())
            .unwrap();
        grower.write_all(b"\nmore").unwrap();
        assert!(matches!(
            read_lines(tmp.path(), 10),
            Err(LoadError::FileTooLarge { max_size: 10, .. })
        ));
    }
}
