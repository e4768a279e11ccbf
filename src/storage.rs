use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::StoreError;
use crate::models::VocabEntry;

/// Reads a JSON array of vocabulary records.
pub fn load_entries(path: &Path) -> Result<Vec<VocabEntry>, StoreError> {
    let raw = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Like [`load_entries`], but a missing file yields `None`.
pub fn load_optional(path: &Path) -> Result<Option<Vec<VocabEntry>>, StoreError> {
    match load_entries(path) {
        Ok(entries) => Ok(Some(entries)),
        Err(StoreError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
            info!("{} not found, skipping", path.display());
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Writes `entries` as a JSON array, replacing the file atomically.
pub fn save_entries(path: &Path, entries: &[VocabEntry]) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(entries).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let tmp = tmp_path(path);
    let io_err = |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };
    fs::write(&tmp, json).map_err(io_err)?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(io_err(e));
    }

    info!("Saved {} user entries to {}", entries.len(), path.display());
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user_synonyms.json");
        let entries = vec![VocabEntry::new("u1", "big", &["large"]).with_class_word(true)];

        save_entries(&path, &entries).unwrap();
        assert_eq!(load_entries(&path).unwrap(), entries);
        assert!(!tmp_path(&path).exists());
    }

    #[test]
    fn test_failed_rename_removes_tmp_file() {
        let dir = tempfile::tempdir().unwrap();
        // A non-empty directory cannot be replaced by a file.
        let path = dir.path().join("taken");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("inner"), "x").unwrap();

        let entries = vec![VocabEntry::new("u1", "big", &["large"])];
        assert!(matches!(save_entries(&path, &entries), Err(StoreError::Io { .. })));
        assert!(!tmp_path(&path).exists());
        assert!(path.is_dir());
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        assert!(load_optional(&path).unwrap().is_none());
        assert!(matches!(load_entries(&path), Err(StoreError::Io { .. })));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_optional(&path), Err(StoreError::Json { .. })));
    }

    #[test]
    fn test_loads_legacy_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("synonyms.json");
        fs::write(&path, r#"[{"id": 1, "hitza": "Polita", "sinonimoak": ["ederra", "dotorea"], "isClass": true}]"#).unwrap();
        let entries = load_entries(&path).unwrap();
        assert_eq!(entries[0].headword, "Polita");
        assert!(entries[0].is_class_word);
    }
}
