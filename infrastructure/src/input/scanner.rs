//! Local filesystem input scanner

use fixcore_application::{InputScanner, ScanError};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Lists matching files directly inside a directory (not recursive)
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalInputScanner;

impl LocalInputScanner {
    pub fn new() -> Self {
        Self
    }
}

impl InputScanner for LocalInputScanner {
    fn matching_files(&self, dir: &Path, extension: &str) -> Result<Vec<PathBuf>, ScanError> {
        if !dir.is_dir() {
            return Err(ScanError::NotADirectory);
        }

        let entries = std::fs::read_dir(dir).map_err(|e| ScanError::Io(e.to_string()))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| ScanError::Io(e.to_string()))?;
            // Byte comparison keeps names that are not valid UTF-8.
            if entry
                .file_name()
                .as_encoded_bytes()
                .ends_with(extension.as_bytes())
            {
                files.push(entry.path());
            }
        }
        files.sort();

        debug!(
            "{} entries ending in '{}' under {}",
            files.len(),
            extension,
            dir.display()
        );
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_only_matching_extension() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.fasta"), ">a\nACGT\n").unwrap();
        std::fs::write(dir.path().join("b.fasta"), ">b\nACGT\n").unwrap();
        std::fs::write(dir.path().join("c.fa"), ">c\nACGT\n").unwrap();
        std::fs::write(dir.path().join("fasta.txt"), "").unwrap();

        let files = LocalInputScanner::new()
            .matching_files(dir.path(), ".fasta")
            .unwrap();
        assert_eq!(
            files,
            vec![dir.path().join("a.fasta"), dir.path().join("b.fasta")]
        );
    }

    #[test]
    fn test_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let files = LocalInputScanner::new()
            .matching_files(dir.path(), ".fasta")
            .unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_missing_directory() {
        let err = LocalInputScanner::new()
            .matching_files(Path::new("/nonexistent/fixcore/input"), ".fasta")
            .unwrap_err();
        assert_eq!(err, ScanError::NotADirectory);
    }

    #[test]
    fn test_file_is_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.fasta");
        std::fs::write(&file, "").unwrap();
        let err = LocalInputScanner::new()
            .matching_files(&file, ".fasta")
            .unwrap_err();
        assert_eq!(err, ScanError::NotADirectory);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_name_still_matches() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let name = OsStr::from_bytes(b"sample_\xff.fasta");
        let path = dir.path().join(name);
        if std::fs::write(&path, ">s\nACGT\n").is_err() {
            // Filesystem refuses non-UTF-8 names.
            return;
        }

        let files = LocalInputScanner::new()
            .matching_files(dir.path(), ".fasta")
            .unwrap();
        assert_eq!(files, vec![path]);
    }

    #[test]
    fn test_not_recursive() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested").join("a.fasta"), "").unwrap();
        let files = LocalInputScanner::new()
            .matching_files(dir.path(), ".fasta")
            .unwrap();
        assert!(files.is_empty());
    }
}
