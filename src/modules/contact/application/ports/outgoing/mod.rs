pub mod contact_notifier;

pub use contact_notifier::{ContactNotifier, ContactNotifierError};
