//! File-based storage implementation for native platforms.

use super::{Storage, StorageError, StorageResult};
use crate::page::PageData;
use std::fs;
use std::path::PathBuf;

/// File-based page storage.
///
/// Stores pages as JSON files in a specified directory.
pub struct FileStorage {
    /// Base directory for page storage.
    base_path: PathBuf,
}

impl FileStorage {
    /// Create a new file storage with the given base directory.
    ///
    /// Creates the directory if it doesn't exist.
    pub fn new(base_path: PathBuf) -> StorageResult<Self> {
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(|e| {
                StorageError::Io(format!("Failed to create storage directory: {}", e))
            })?;
        }
        Ok(Self { base_path })
    }

    /// Create file storage in the default location.
    ///
    /// On Unix: `~/.local/share/pagecraft/pages/`
    /// On Windows: `%APPDATA%\pagecraft\pages\`
    pub fn default_location() -> StorageResult<Self> {
        let base = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| StorageError::Io("Could not determine home directory".to_string()))?;

        let path = base.join("pagecraft").join("pages");
        Self::new(path)
    }

    /// Get the file path for a page id.
    fn page_path(&self, id: &str) -> PathBuf {
        // Sanitize id to be safe for filenames
        let safe_id: String = id
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.base_path.join(format!("{}.json", safe_id))
    }

    /// Get the base path.
    pub fn base_path(&self) -> &PathBuf {
        &self.base_path
    }
}

impl Storage for FileStorage {
    fn save(&self, id: &str, page: &PageData) -> StorageResult<()> {
        let path = self.page_path(id);
        let json = page
            .to_json()
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        fs::write(&path, json)
            .map_err(|e| StorageError::Io(format!("Failed to write {}: {}", path.display(), e)))
    }

    fn load(&self, id: &str) -> StorageResult<PageData> {
        let path = self.page_path(id);
        if !path.exists() {
            return Err(StorageError::NotFound(id.to_string()));
        }

        let json = fs::read_to_string(&path)
            .map_err(|e| StorageError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

        PageData::from_json(&json).map_err(|e| {
            StorageError::Serialization(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    fn delete(&self, id: &str) -> StorageResult<()> {
        let path = self.page_path(id);
        if path.exists() {
            fs::remove_file(&path).map_err(|e| {
                StorageError::Io(format!("Failed to delete {}: {}", path.display(), e))
            })?;
        }
        Ok(())
    }

    fn list(&self) -> StorageResult<Vec<String>> {
        let entries = fs::read_dir(&self.base_path)
            .map_err(|e| StorageError::Io(format!("Failed to list pages: {}", e)))?;

        let mut ids = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StorageError::Io(e.to_string()))?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    ids.push(stem.to_string());
                }
            }
        }
        ids.sort();
        Ok(ids)
    }

    fn exists(&self, id: &str) -> StorageResult<bool> {
        Ok(self.page_path(id).exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Element, ElementKind};
    use kurbo::Point;

    fn storage() -> (tempfile::TempDir, FileStorage) {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();
        (dir, storage)
    }

    #[test]
    fn test_save_load_roundtrip() {
        let (_dir, storage) = storage();
        let mut page = PageData::new();
        page.add_element(Element::from_library(
            ElementKind::Section,
            Point::new(0.0, 0.0),
        ));

        storage.save("home", &page).unwrap();
        let loaded = storage.load("home").unwrap();
        assert_eq!(loaded, page);
    }

    #[test]
    fn test_missing_page_is_not_found() {
        let (_dir, storage) = storage();
        assert!(matches!(
            storage.load("missing"),
            Err(StorageError::NotFound(_))
        ));
        assert!(!storage.exists("missing").unwrap());
    }

    #[test]
    fn test_list_and_delete() {
        let (_dir, storage) = storage();
        storage.save("a", &PageData::new()).unwrap();
        storage.save("b", &PageData::new()).unwrap();
        assert_eq!(storage.list().unwrap(), vec!["a", "b"]);

        storage.delete("a").unwrap();
        assert_eq!(storage.list().unwrap(), vec!["b"]);
    }

    #[test]
    fn test_ids_sanitized_for_filenames() {
        let (_dir, storage) = storage();
        storage.save("my/page:1", &PageData::new()).unwrap();
        assert!(storage.exists("my/page:1").unwrap());
        assert_eq!(storage.list().unwrap(), vec!["my_page_1"]);
    }

    #[test]
    fn test_corrupt_file_is_serialization_error() {
        let (dir, storage) = storage();
        fs::write(dir.path().join("bad.json"), "{not json").unwrap();
        assert!(matches!(
            storage.load("bad"),
            Err(StorageError::Serialization(_))
        ));
    }
}
