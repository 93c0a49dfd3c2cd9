//! FAQ page state: fetch result plus local search and entity filters.

use aeas_models::FaqItem;

use crate::core::entities::{Entity, is_visible};

/// Fetch state of the FAQ list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FaqState {
    /// Request in flight.
    #[default]
    Loading,
    /// Request failed.
    Failed,
    /// Entries received.
    Loaded(Vec<FaqItem>),
}

/// What the FAQ page renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FaqView {
    /// Spinner with localized copy.
    Loading,
    /// Fetch error.
    Failed,
    /// The backend has no entries at all.
    Empty,
    /// Entries exist but the search or entity filter hides all of them.
    NoMatches,
    /// Visible entries.
    Items(Vec<FaqItem>),
}

impl FaqView {
    /// Translation key of the empty-state copy, if this is an empty state.
    #[must_use]
    pub const fn message_key(&self) -> Option<&'static str> {
        match self {
            Self::Loading => Some("faq.loading"),
            Self::Failed => Some("faq.error"),
            Self::Empty => Some("faq.empty"),
            Self::NoMatches => Some("faq.empty_filtered"),
            Self::Items(_) => None,
        }
    }
}

impl FaqState {
    /// Resolve the view for a search string, language and entity.
    #[must_use]
    pub fn view(&self, search: &str, language: &str, entity: Option<&Entity>) -> FaqView {
        match self {
            Self::Loading => FaqView::Loading,
            Self::Failed => FaqView::Failed,
            Self::Loaded(items) if items.is_empty() => FaqView::Empty,
            Self::Loaded(items) => {
                let visible: Vec<FaqItem> = items
                    .iter()
                    .filter(|item| is_visible(*item, entity) && item.matches(search, language))
                    .cloned()
                    .collect();
                if visible.is_empty() {
                    FaqView::NoMatches
                } else {
                    FaqView::Items(visible)
                }
            }
        }
    }
}
