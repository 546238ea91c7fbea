use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use crate::modules::contact::application::ports::outgoing::{
    ContactNotifier, ContactNotifierError,
};
use crate::modules::contact::domain::ContactMessage;

pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitContactError {
    #[error("Could not deliver message: {0}")]
    DeliveryFailed(String),
}

impl From<ContactNotifierError> for SubmitContactError {
    fn from(e: ContactNotifierError) -> Self {
        match e {
            ContactNotifierError::DeliveryFailed(msg) => SubmitContactError::DeliveryFailed(msg),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactReceipt {
    pub message: String,
}

impl ContactReceipt {
    fn for_sender(name: &str) -> Self {
        Self {
            message: format!(
                "Thank you {name}! Your message has been received. I'll get back to you soon!"
            ),
        }
    }
}

#[async_trait]
pub trait ISubmitContactUseCase: Send + Sync {
    async fn execute(&self, message: ContactMessage) -> Result<ContactReceipt, SubmitContactError>;
}

/// Waits out the configured delay, then hands the message to the notifier.
/// The delay runs to completion once started.
#[derive(Debug, Clone)]
pub struct SubmitContactUseCase<N>
where
    N: ContactNotifier,
{
    notifier: N,
    delay: Duration,
}

impl<N> SubmitContactUseCase<N>
where
    N: ContactNotifier,
{
    pub fn new(notifier: N, delay: Duration) -> Self {
        Self { notifier, delay }
    }
}

#[async_trait]
impl<N> ISubmitContactUseCase for SubmitContactUseCase<N>
where
    N: ContactNotifier,
{
    async fn execute(&self, message: ContactMessage) -> Result<ContactReceipt, SubmitContactError> {
        debug!(delay_ms = self.delay.as_millis() as u64, "Submitting contact message");
        tokio::time::sleep(self.delay).await;

        self.notifier.notify(&message).await?;
        Ok(ContactReceipt::for_sender(message.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::contact::application::ports::outgoing::contact_notifier::MockContactNotifier;
    use std::time::Instant;

    fn message() -> ContactMessage {
        ContactMessage::new(
            "Grace".to_string(),
            "grace@example.com".to_string(),
            "Let's talk".to_string(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn returns_personalised_receipt() {
        let mut notifier = MockContactNotifier::new();
        notifier
            .expect_notify()
            .withf(|msg| msg.name() == "Grace")
            .times(1)
            .returning(|_| Ok(()));
        let use_case = SubmitContactUseCase::new(notifier, Duration::ZERO);

        let receipt = use_case.execute(message()).await.unwrap();

        assert_eq!(
            receipt.message,
            "Thank you Grace! Your message has been received. I'll get back to you soon!"
        );
    }

    #[tokio::test]
    async fn waits_for_configured_delay() {
        let mut notifier = MockContactNotifier::new();
        notifier.expect_notify().returning(|_| Ok(()));
        let use_case = SubmitContactUseCase::new(notifier, Duration::from_millis(30));

        let started = Instant::now();
        use_case.execute(message()).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(30));
    }

    #[tokio::test]
    async fn notifier_failure_is_reported() {
        let mut notifier = MockContactNotifier::new();
        notifier
            .expect_notify()
            .returning(|_| Err(ContactNotifierError::DeliveryFailed("down".to_string())));
        let use_case = SubmitContactUseCase::new(notifier, Duration::ZERO);

        let result = use_case.execute(message()).await;

        assert_eq!(
            result,
            Err(SubmitContactError::DeliveryFailed("down".to_string()))
        );
    }
}
