// src/modules/portfolio/application/ports/outgoing/document_storage.rs

use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    /// No storage backend in this environment.
    #[error("Storage unavailable")]
    Unavailable,

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage quota exceeded: {size} bytes (limit {limit})")]
    QuotaExceeded { size: usize, limit: usize },

    #[error("I/O error: {0}")]
    Io(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (key-value namespace holding serialized documents)
// ──────────────────────────────────────────────────────────
//

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStorage: Send + Sync {
    /// `Ok(None)` when nothing was ever stored under `key`.
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrites the value under `key`.
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
