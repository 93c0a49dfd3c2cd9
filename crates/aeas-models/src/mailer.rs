//! Public mailer payloads: contact form and newsletter subscription.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Longest message body accepted by the contact form.
pub const MAX_MESSAGE_LEN: usize = 5000;

/// Loose syntactic email check (`local@domain.tld`, no whitespace).
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(email.trim()))
}

/// Body for `POST /public/mailer/send`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    /// Sender name.
    pub name: String,
    /// Reply address.
    pub email: String,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub message: String,
    /// Interface language of the sender.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// School entity the message is addressed to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entidade: Option<String>,
}

impl ContactMessage {
    /// Check every field the backend requires.
    ///
    /// # Errors
    /// Returns the first missing or malformed field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::Missing { field });
            }
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::invalid("email", "malformed", &self.email));
        }
        if self.message.chars().count() > MAX_MESSAGE_LEN {
            return Err(ValidationError::Invalid {
                field: "message",
                reason: "too_long",
                value: None,
            });
        }
        Ok(())
    }
}

/// Body for `POST /public/mailer/newsletter/subscribe`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewsletterSubscription {
    /// Subscriber address.
    pub email: String,
    /// Preferred newsletter language.
    pub language: String,
}

impl NewsletterSubscription {
    /// Subscription with a trimmed address.
    #[must_use]
    pub fn new(email: &str, language: &str) -> Self {
        Self {
            email: email.trim().to_string(),
            language: language.to_string(),
        }
    }

    /// Reject blank or malformed addresses.
    ///
    /// # Errors
    /// Returns [`ValidationError`] naming the `email` field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.email.trim().is_empty() {
            return Err(ValidationError::Missing { field: "email" });
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::invalid("email", "malformed", &self.email));
        }
        Ok(())
    }
}

/// Acknowledgement returned by the mailer endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MailerResponse {
    /// Whether the backend accepted the request.
    #[serde(default = "accepted")]
    pub success: bool,
    /// Optional backend message.
    #[serde(default)]
    pub message: Option<String>,
}

const fn accepted() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_check_accepts_common_shapes() {
        assert!(is_valid_email("secretaria@aeantoniosergio.pt"));
        assert!(is_valid_email("  aluno.1@escola.edu.pt "));
        assert!(!is_valid_email("sem-arroba.pt"));
        assert!(!is_valid_email("a b@c.pt"));
        assert!(!is_valid_email("a@semponto"));
    }

    #[test]
    fn contact_message_reports_first_problem() {
        let mut message = ContactMessage {
            name: "Maria".to_string(),
            email: "maria@example.pt".to_string(),
            subject: "Matrículas".to_string(),
            message: String::new(),
            ..ContactMessage::default()
        };
        assert_eq!(message.validate(), Err(ValidationError::Missing { field: "message" }));

        message.message = "Olá".to_string();
        message.email = "maria".to_string();
        assert_eq!(message.validate().map_err(|err| err.field()), Err("email"));

        message.email = "maria@example.pt".to_string();
        assert!(message.validate().is_ok());
    }

    #[test]
    fn newsletter_subscription_trims_and_serialises() -> Result<(), serde_json::Error> {
        let subscription = NewsletterSubscription::new(" pai@example.pt ", "pt");
        assert!(subscription.validate().is_ok());
        assert_eq!(
            serde_json::to_string(&subscription)?,
            r#"{"email":"pai@example.pt","language":"pt"}"#
        );
        assert!(NewsletterSubscription::new("", "en").validate().is_err());

        let ack: MailerResponse = serde_json::from_str("{}")?;
        assert!(ack.success);
        Ok(())
    }
}
