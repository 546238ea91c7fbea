use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::modules::portfolio::application::ports::outgoing::{DocumentStorage, StorageError};

/// Browsers commonly cap local storage at 5 MiB per origin.
pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

/// Stores each key as `{dir}/{key}.json`. Writes go through a temp file and a
/// rename so readers never observe a half-written document.
#[derive(Debug, Clone)]
pub struct FileDocumentStorage {
    dir: PathBuf,
    quota_bytes: usize,
}

impl FileDocumentStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_quota(dir, DEFAULT_QUOTA_BYTES)
    }

    pub fn with_quota(dir: impl Into<PathBuf>, quota_bytes: usize) -> Self {
        Self {
            dir: dir.into(),
            quota_bytes,
        }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        if !is_valid_key(key) {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

/// Keys become file names, so only `[A-Za-z0-9_-]+` is accepted.
fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[async_trait]
impl DocumentStorage for FileDocumentStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e.to_string())),
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        if value.len() > self.quota_bytes {
            return Err(StorageError::QuotaExceeded {
                size: value.len(),
                limit: self.quota_bytes,
            });
        }

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;

        let tmp_path = self.dir.join(format!("{key}.json.tmp"));
        tokio::fs::write(&tmp_path, value)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;
        tokio::fs::rename(&tmp_path, &path)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))
    }
}
