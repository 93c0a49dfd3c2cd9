//! Home-page news ticker assembly.
//!
//! # Design
//! - Three independent fetches (events, projects, news) land in separate
//!   slots; the ticker is recomputed from whatever has arrived.
//! - Merge order is fixed: events, then projects, then news. The first
//!   occurrence of an id wins.

use std::collections::HashSet;

use aeas_models::ContentItem;

/// Result slot of one ticker source.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Slot<T> {
    /// Request still in flight.
    #[default]
    Loading,
    /// Request finished.
    Loaded(T),
    /// Request failed; treated as empty.
    Failed,
}

impl<T> Slot<T> {
    /// Loaded value, if any.
    pub const fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            Self::Loading | Self::Failed => None,
        }
    }

    /// Whether the request is still pending.
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Merge the three sources into the ticker list.
#[must_use]
pub fn merge_ticker(
    events: &Slot<Vec<ContentItem>>,
    projects: &Slot<Vec<ContentItem>>,
    news: &Slot<Vec<ContentItem>>,
) -> Vec<ContentItem> {
    let mut seen = HashSet::new();
    [events, projects, news]
        .into_iter()
        .filter_map(Slot::loaded)
        .flatten()
        .filter(|item| seen.insert(item.id.clone()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, title: &str) -> ContentItem {
        ContentItem {
            id: id.to_string(),
            slug: title.to_lowercase(),
            title: title.to_string(),
            excerpt: None,
            content: None,
            kind: None,
            published_at: None,
            author: None,
            categories: None,
            featured_image: None,
            featured: true,
            entidades: None,
            starts_at: None,
            ends_at: None,
            location: None,
            comments: None,
        }
    }

    fn titles(items: &[ContentItem]) -> Vec<&str> {
        items.iter().map(|item| item.title.as_str()).collect()
    }

    #[test]
    fn merge_keeps_priority_order_and_first_occurrence() {
        let events = Slot::Loaded(vec![item("1", "Feira"), item("2", "Concerto")]);
        let projects = Slot::Loaded(vec![item("2", "Duplicado"), item("3", "Eco-Escolas")]);
        let news = Slot::Loaded(vec![item("4", "Resultados")]);
        assert_eq!(
            titles(&merge_ticker(&events, &projects, &news)),
            vec!["Feira", "Concerto", "Eco-Escolas", "Resultados"]
        );
    }

    #[test]
    fn pending_and_failed_sources_count_as_empty() {
        let news = Slot::Loaded(vec![item("9", "Matrículas")]);
        let merged = merge_ticker(&Slot::Loading, &Slot::Failed, &news);
        assert_eq!(titles(&merged), vec!["Matrículas"]);
        assert!(merge_ticker(&Slot::Loading, &Slot::Loading, &Slot::Loading).is_empty());
    }
}
