//! In-memory storage implementation.

use super::{Storage, StorageError, StorageResult};
use crate::page::PageData;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory storage for testing and ephemeral use.
#[derive(Default)]
pub struct MemoryStorage {
    pages: RwLock<HashMap<String, PageData>>,
}

impl MemoryStorage {
    /// Create a new empty memory storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn save(&self, id: &str, page: &PageData) -> StorageResult<()> {
        let mut pages = self
            .pages
            .write()
            .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
        pages.insert(id.to_string(), page.clone());
        Ok(())
    }

    fn load(&self, id: &str) -> StorageResult<PageData> {
        let pages = self
            .pages
            .read()
            .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
        pages
            .get(id)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(id.to_string()))
    }

    fn delete(&self, id: &str) -> StorageResult<()> {
        let mut pages = self
            .pages
            .write()
            .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
        pages.remove(id);
        Ok(())
    }

    fn list(&self) -> StorageResult<Vec<String>> {
        let pages = self
            .pages
            .read()
            .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
        Ok(pages.keys().cloned().collect())
    }
}
