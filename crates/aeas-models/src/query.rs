//! Query-string assembly for list endpoints.
//!
//! # Design
//! - Absent values are skipped, never serialised as empty strings.
//! - Array filters repeat the key once per element.
//! - Filters validate before they are turned into a path.

use std::fmt::Display;

use crate::error::ValidationError;

/// Ordered `key=value` pairs, percent-encoded on output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString {
    pairs: Vec<(&'static str, String)>,
}

impl QueryString {
    /// Empty query.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append a value unconditionally.
    pub fn push(&mut self, key: &'static str, value: impl Display) -> &mut Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    /// Append a value when present.
    pub fn push_opt<T: Display>(&mut self, key: &'static str, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    /// Append a text value when present and not blank. The value is trimmed.
    pub fn push_text(&mut self, key: &'static str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value.map(str::trim).filter(|value| !value.is_empty()) {
            self.push(key, value);
        }
        self
    }

    /// Append every element of an array filter under the same key.
    pub fn push_all<T: Display>(&mut self, key: &'static str, values: &[T]) -> &mut Self {
        for value in values {
            self.push(key, value);
        }
        self
    }

    /// Whether no pair has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Value of the first pair with `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, value)| value.as_str())
    }

    /// Encoded query without the leading `?`.
    #[must_use]
    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// `path` with the encoded query appended when non-empty.
    #[must_use]
    pub fn append_to(&self, path: &str) -> String {
        if self.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{}", self.encode())
        }
    }
}

/// Typed filter set accepted by a list endpoint.
pub trait ListFilters {
    /// Reject values the backend would refuse.
    ///
    /// # Errors
    /// Returns the first [`ValidationError`] found.
    fn validate(&self) -> Result<(), ValidationError>;

    /// Serialise the present fields.
    fn to_query(&self) -> QueryString;

    /// Validate and build `base?query`.
    ///
    /// # Errors
    /// Returns a [`ValidationError`] when [`ListFilters::validate`] fails.
    fn query_path(&self, base: &str) -> Result<String, ValidationError> {
        self.validate()?;
        Ok(self.to_query().append_to(base))
    }
}

pub(crate) fn check_page(field: &'static str, page: Option<u32>) -> Result<(), ValidationError> {
    match page {
        Some(0) => Err(ValidationError::invalid(field, "must_be_positive", 0)),
        _ => Ok(()),
    }
}

pub(crate) fn check_page_size(
    field: &'static str,
    size: Option<u32>,
    max: u32,
) -> Result<(), ValidationError> {
    match size {
        Some(size) if size == 0 || size > max => {
            Err(ValidationError::invalid(field, "out_of_range", size))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_blank_values_are_skipped() {
        let mut query = QueryString::new();
        query
            .push_opt("page", Some(2))
            .push_opt::<u32>("limit", None)
            .push_text("search", Some("   "))
            .push_text("region", Some(" Porto "));
        assert_eq!(query.encode(), "page=2&region=Porto");
        assert_eq!(query.get("region"), Some("Porto"));
        assert_eq!(query.get("limit"), None);
    }

    #[test]
    fn arrays_repeat_keys_and_values_are_encoded() {
        let mut query = QueryString::new();
        query
            .push_all("code", &["news.read", "news write"])
            .push_opt("active", Some(true));
        assert_eq!(
            query.encode(),
            "code=news.read&code=news%20write&active=true"
        );
    }

    #[test]
    fn append_to_leaves_bare_paths_alone() {
        assert_eq!(QueryString::new().append_to("/holidays"), "/holidays");
        let mut query = QueryString::new();
        query.push("year", 2025);
        assert_eq!(query.append_to("/holidays"), "/holidays?year=2025");
    }

    #[test]
    fn page_checks_reject_zero_and_oversize() {
        assert!(check_page("page", Some(0)).is_err());
        assert!(check_page("page", None).is_ok());
        assert!(check_page_size("limit", Some(101), 100).is_err());
        assert!(check_page_size("limit", Some(100), 100).is_ok());
    }
}
