//! Error payloads returned by the backend and client-side validation errors.

use serde::Deserialize;
use thiserror::Error;

/// Validation failure raised before a request is serialised.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was empty.
    #[error("missing required field")]
    Missing {
        /// Field name that was empty.
        field: &'static str,
    },
    /// A field carried a value outside its accepted domain.
    #[error("invalid field value")]
    Invalid {
        /// Field name that failed validation.
        field: &'static str,
        /// Machine-readable reason for the failure.
        reason: &'static str,
        /// Offending value, when it is safe to echo back.
        value: Option<String>,
    },
}

impl ValidationError {
    pub(crate) fn invalid(field: &'static str, reason: &'static str, value: impl ToString) -> Self {
        Self::Invalid {
            field,
            reason,
            value: Some(value.to_string()),
        }
    }

    /// Field name the error refers to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Missing { field } | Self::Invalid { field, .. } => field,
        }
    }
}

/// `message` as emitted by the backend: a single string or a list of
/// validation messages.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ErrorMessage {
    /// Single human-readable message.
    Single(String),
    /// Several validation messages.
    Many(Vec<String>),
}

/// JSON error document returned on non-success responses.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// Primary message.
    #[serde(default)]
    pub message: Option<ErrorMessage>,
    /// Short error label (e.g. `Not Found`).
    #[serde(default)]
    pub error: Option<String>,
    /// Status code echoed in the body.
    #[serde(default)]
    pub status_code: Option<u16>,
}

impl ErrorBody {
    /// Best human-readable summary, preferring `message` over `error`.
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        let message = match &self.message {
            Some(ErrorMessage::Single(text)) => Some(text.trim()),
            Some(ErrorMessage::Many(list)) => list.iter().map(|text| text.trim()).find(|text| !text.is_empty()),
            None => None,
        };
        message
            .filter(|text| !text.is_empty())
            .or_else(|| self.error.as_deref().map(str::trim).filter(|text| !text.is_empty()))
            .map(ToString::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_prefers_message_then_error() -> Result<(), serde_json::Error> {
        let single: ErrorBody = serde_json::from_str(r#"{"message":"Not Found","statusCode":404}"#)?;
        assert_eq!(single.summary().as_deref(), Some("Not Found"));
        assert_eq!(single.status_code, Some(404));

        let many: ErrorBody =
            serde_json::from_str(r#"{"message":["", "email must be an email"],"error":"Bad Request"}"#)?;
        assert_eq!(many.summary().as_deref(), Some("email must be an email"));

        let error_only: ErrorBody = serde_json::from_str(r#"{"error":"Conflict"}"#)?;
        assert_eq!(error_only.summary().as_deref(), Some("Conflict"));

        let blank: ErrorBody = serde_json::from_str(r#"{"message":"  "}"#)?;
        assert!(blank.summary().is_none());
        Ok(())
    }

    #[test]
    fn validation_error_exposes_field() {
        let err = ValidationError::invalid("page", "must_be_positive", 0);
        assert_eq!(err.field(), "page");
        assert_eq!(err.to_string(), "invalid field value");
        assert_eq!(ValidationError::Missing { field: "email" }.field(), "email");
    }
}
