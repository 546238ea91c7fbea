use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::modules::contact::application::ports::outgoing::{
    ContactNotifier, ContactNotifierError,
};
use crate::modules::contact::application::use_cases::submit_contact::{
    ContactReceipt, ISubmitContactUseCase, SubmitContactError,
};
use crate::modules::contact::domain::ContactMessage;
use crate::modules::portfolio::application::ports::outgoing::{DocumentStorage, StorageError};

/// Storage backend that refuses every call.
pub struct UnavailableStorage;

#[async_trait]
impl DocumentStorage for UnavailableStorage {
    async fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    async fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

/// Confirms every submission immediately without touching a notifier.
pub struct StubSubmitContactUseCase;

#[async_trait]
impl ISubmitContactUseCase for StubSubmitContactUseCase {
    async fn execute(&self, message: ContactMessage) -> Result<ContactReceipt, SubmitContactError> {
        Ok(ContactReceipt {
            message: format!(
                "Thank you {}! Your message has been received. I'll get back to you soon!",
                message.name()
            ),
        })
    }
}

/// Keeps every message it is handed so tests can inspect them.
#[derive(Clone, Default)]
pub struct RecordingContactNotifier {
    received: Arc<Mutex<Vec<ContactMessage>>>,
}

impl RecordingContactNotifier {
    pub async fn received(&self) -> Vec<ContactMessage> {
        self.received.lock().await.clone()
    }
}

#[async_trait]
impl ContactNotifier for RecordingContactNotifier {
    async fn notify(&self, message: &ContactMessage) -> Result<(), ContactNotifierError> {
        self.received.lock().await.push(message.clone());
        Ok(())
    }
}
