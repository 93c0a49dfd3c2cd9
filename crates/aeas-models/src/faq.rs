//! Frequently asked questions.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::ident;

static HTML_TAG: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"<[^>]*>").ok());

/// Text available in Portuguese and, optionally, English.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocalizedText {
    /// Portuguese text (always present).
    pub pt: String,
    /// English text, when translated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<String>,
}

impl LocalizedText {
    /// Text for `language`, falling back to Portuguese when no non-blank
    /// translation exists.
    #[must_use]
    pub fn get(&self, language: &str) -> &str {
        match language {
            "en" => self
                .en
                .as_deref()
                .filter(|text| !text.trim().is_empty())
                .unwrap_or(&self.pt),
            _ => &self.pt,
        }
    }
}

/// FAQ entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FaqItem {
    /// Entry id.
    #[serde(deserialize_with = "ident::deserialize")]
    pub id: String,
    /// Question per language.
    pub question: LocalizedText,
    /// Answer per language.
    pub answer: LocalizedText,
    /// Whether `answer` is raw HTML.
    #[serde(default)]
    pub is_html: bool,
    /// Grouping label.
    #[serde(default)]
    pub category: Option<String>,
    /// School entities the entry is scoped to.
    #[serde(default)]
    pub entidades: Option<Vec<String>>,
    /// Display order; lower first.
    #[serde(default)]
    pub order: i32,
}

impl FaqItem {
    /// Case-insensitive match of `needle` against question and answer in
    /// `language`. HTML answers are matched on their text only, never on
    /// markup. A blank needle matches everything.
    #[must_use]
    pub fn matches(&self, needle: &str, language: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.question.get(language).to_lowercase().contains(&needle)
            || self.answer_text(language).to_lowercase().contains(&needle)
    }

    fn answer_text(&self, language: &str) -> Cow<'_, str> {
        let answer = self.answer.get(language);
        match (self.is_html, HTML_TAG.as_ref()) {
            (true, Some(tag)) => tag.replace_all(answer, " "),
            _ => Cow::Borrowed(answer),
        }
    }
}
