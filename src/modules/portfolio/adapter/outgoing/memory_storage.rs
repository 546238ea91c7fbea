use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::portfolio::application::ports::outgoing::{DocumentStorage, StorageError};

/// Process-local storage. Used when no storage directory is configured and in
/// tests; contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryDocumentStorage {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryDocumentStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let mut items = HashMap::new();
        items.insert(key.to_string(), value.to_string());
        Self {
            items: RwLock::new(items),
        }
    }
}

#[async_trait]
impl DocumentStorage for MemoryDocumentStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.read().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
