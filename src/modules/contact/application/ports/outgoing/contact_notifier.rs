// src/modules/contact/application/ports/outgoing/contact_notifier.rs
use async_trait::async_trait;

use crate::modules::contact::domain::ContactMessage;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContactNotifierError {
    #[error("Delivery failed: {0}")]
    DeliveryFailed(String),
}

/// Hands a contact message to whoever should read it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactNotifier: Send + Sync {
    async fn notify(&self, message: &ContactMessage) -> Result<(), ContactNotifierError>;
}
