use async_trait::async_trait;
use tracing::info;

use crate::modules::contact::application::ports::outgoing::{
    ContactNotifier, ContactNotifierError,
};
use crate::modules::contact::domain::ContactMessage;

/// Logs received messages. There is no delivery backend and nothing is kept.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimulatedContactNotifier;

impl SimulatedContactNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ContactNotifier for SimulatedContactNotifier {
    async fn notify(&self, message: &ContactMessage) -> Result<(), ContactNotifierError> {
        info!(
            from = %message.email(),
            name = %message.name(),
            length = message.message().len(),
            "Contact message received"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn accepts_repeated_messages_without_holding_them() {
        let notifier = SimulatedContactNotifier::new();
        let msg = ContactMessage::new(
            "Ada".to_string(),
            "ada@example.com".to_string(),
            "Hi".to_string(),
        )
        .unwrap();

        for _ in 0..3 {
            assert_eq!(notifier.notify(&msg).await, Ok(()));
        }
        assert_eq!(std::mem::size_of::<SimulatedContactNotifier>(), 0);
    }
}
