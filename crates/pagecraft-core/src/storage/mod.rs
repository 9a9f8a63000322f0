//! Storage abstraction for page persistence.
//!
//! The geometry core does no I/O of its own; these backends are the boundary
//! the surrounding application saves and loads [`PageData`] through, as JSON
//! documents keyed by id.

mod memory;

#[cfg(not(target_arch = "wasm32"))]
mod file;

pub use memory::MemoryStorage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;

use crate::page::PageData;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Page not found: {0}")]
    NotFound(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for page storage backends.
///
/// Implementations can store pages in memory, on the filesystem, or behind a
/// remote API; the editor session only sees this surface.
pub trait Storage: Send + Sync {
    /// Save a page.
    fn save(&self, id: &str, page: &PageData) -> StorageResult<()>;

    /// Load a page.
    fn load(&self, id: &str) -> StorageResult<PageData>;

    /// Delete a page.
    fn delete(&self, id: &str) -> StorageResult<()>;

    /// List all page ids.
    fn list(&self) -> StorageResult<Vec<String>>;

    /// Check if a page exists.
    fn exists(&self, id: &str) -> StorageResult<bool> {
        Ok(self.list()?.iter().any(|existing| existing == id))
    }
}
