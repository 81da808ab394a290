use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{Result, StoreError};
use crate::storage::StorageBackend;

/// File-backed slot: one JSON document at a fixed path.
///
/// Writes go through a temp file in the same directory and are renamed into
/// place, so a failed write never clobbers the previous catalog.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for FileBackend {
    fn read_slot(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    fn write_slot(&self, payload: &str) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent)?;
                parent.to_path_buf()
            }
            _ => PathBuf::from("."),
        };

        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(payload.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_reads_none() {
        let dir = tempdir().unwrap();
        let backend = FileBackend::new(dir.path().join("catalog.json"));
        assert!(backend.read_slot().unwrap().is_none());
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let backend = FileBackend::new(dir.path().join("nested/data/catalog.json"));

        backend.write_slot("[]").unwrap();
        assert_eq!(backend.read_slot().unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_rewrite_replaces_contents() {
        let dir = tempdir().unwrap();
        let backend = FileBackend::new(dir.path().join("catalog.json"));

        backend.write_slot("first").unwrap();
        backend.write_slot("second").unwrap();
        assert_eq!(backend.read_slot().unwrap().as_deref(), Some("second"));
    }
}
