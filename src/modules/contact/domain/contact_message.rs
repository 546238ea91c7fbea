use email_address::EmailAddress;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContactError {
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Email cannot be empty")]
    EmptyEmail,
    #[error("Invalid email format")]
    InvalidEmailFormat,
    #[error("Message cannot be empty")]
    EmptyMessage,
}

/// Validated message from the contact form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactMessage {
    name: String,
    email: String,
    message: String,
}

impl ContactMessage {
    pub fn new(name: String, email: String, message: String) -> Result<Self, ContactError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ContactError::EmptyName);
        }

        let email = email.trim();
        if email.is_empty() {
            return Err(ContactError::EmptyEmail);
        }
        if !EmailAddress::is_valid(email) {
            return Err(ContactError::InvalidEmailFormat);
        }

        let message = message.trim();
        if message.is_empty() {
            return Err(ContactError::EmptyMessage);
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
