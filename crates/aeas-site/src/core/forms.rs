//! Form outcomes for the newsletter and contact forms.
//!
//! Both forms map request results to translation keys so the views stay
//! free of status-code checks.

use aeas_models::{ContactMessage, NewsletterSubscription, ValidationError};

use crate::services::ApiError;

/// Backend status for an address that is already on the list.
pub const ALREADY_SUBSCRIBED_STATUS: u16 = 409;

/// Result of a newsletter submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NewsletterOutcome {
    /// Subscription accepted.
    Subscribed,
    /// Address already subscribed.
    AlreadySubscribed,
    /// Address rejected before sending.
    InvalidEmail,
    /// Any other failure.
    Failed,
}

impl NewsletterOutcome {
    /// Classify a request result.
    #[must_use]
    pub fn from_result<T>(result: &Result<T, ApiError>) -> Self {
        match result {
            Ok(_) => Self::Subscribed,
            Err(err) if err.status() == Some(ALREADY_SUBSCRIBED_STATUS) => {
                Self::AlreadySubscribed
            }
            Err(_) => Self::Failed,
        }
    }

    /// Translation key of the feedback message.
    #[must_use]
    pub const fn message_key(self) -> &'static str {
        match self {
            Self::Subscribed => "newsletter.success",
            Self::AlreadySubscribed => "newsletter.already_subscribed",
            Self::InvalidEmail => "newsletter.invalid_email",
            Self::Failed => "newsletter.failure",
        }
    }

    /// Whether the input should be cleared.
    #[must_use]
    pub const fn clears_input(self) -> bool {
        matches!(self, Self::Subscribed)
    }

    /// Whether the message reports success.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Subscribed)
    }
}

/// Build and validate a newsletter request.
///
/// # Errors
/// Returns [`NewsletterOutcome::InvalidEmail`] for blank or malformed input.
pub fn prepare_subscription(
    email: &str,
    language: &str,
) -> Result<NewsletterSubscription, NewsletterOutcome> {
    let subscription = NewsletterSubscription::new(email, language);
    subscription
        .validate()
        .map(|()| subscription)
        .map_err(|_| NewsletterOutcome::InvalidEmail)
}

/// Translation key for a contact form validation failure.
#[must_use]
pub fn contact_error_key(err: &ValidationError) -> &'static str {
    match err {
        ValidationError::Missing { .. } => "contact.missing_field",
        ValidationError::Invalid {
            field: "email", ..
        } => "contact.invalid_email",
        ValidationError::Invalid {
            reason: "too_long", ..
        } => "contact.too_long",
        ValidationError::Invalid { .. } => "contact.failure",
    }
}

/// Editable contact form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    /// Sender name.
    pub name: String,
    /// Reply address.
    pub email: String,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub message: String,
}

impl ContactDraft {
    /// Validated request body.
    ///
    /// # Errors
    /// Returns the first [`ValidationError`] found in the draft.
    pub fn to_message(
        &self,
        language: &str,
        entidade: Option<&str>,
    ) -> Result<ContactMessage, ValidationError> {
        let message = ContactMessage {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
            language: Some(language.to_string()),
            entidade: entidade.map(ToString::to_string),
        };
        message.validate()?;
        Ok(message)
    }
}
