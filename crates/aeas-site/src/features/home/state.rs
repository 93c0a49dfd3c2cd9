//! Home page feeds.

use aeas_models::{ContentFilters, ContentItem};

use crate::core::entities::{Entity, filter_by_entity};
use crate::core::ticker::{Slot, merge_ticker};
use crate::features::content::state::{ContentSection, featured_filters};

/// Items requested per featured feed.
pub const FEED_LIMIT: u32 = 6;

/// News cards shown under the hero.
pub const FEATURED_NEWS_CARDS: usize = 3;

/// The three featured feeds, each filled by its own request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HomeFeeds {
    /// Featured events.
    pub events: Slot<Vec<ContentItem>>,
    /// Featured projects.
    pub projects: Slot<Vec<ContentItem>>,
    /// Featured news.
    pub news: Slot<Vec<ContentItem>>,
}

impl HomeFeeds {
    /// Backend filters of each feed, in ticker order.
    #[must_use]
    pub fn requests(language: &str) -> [(ContentSection, ContentFilters); 3] {
        [ContentSection::Events, ContentSection::Projects, ContentSection::News]
            .map(|section| (section, featured_filters(section.kind(), language, FEED_LIMIT)))
    }

    /// Store the outcome of the feed for `section`.
    pub fn set(&mut self, section: ContentSection, slot: Slot<Vec<ContentItem>>) {
        match section {
            ContentSection::Events => self.events = slot,
            ContentSection::Projects => self.projects = slot,
            ContentSection::News => self.news = slot,
        }
    }

    /// Whether any feed is still in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.events.is_loading() || self.projects.is_loading() || self.news.is_loading()
    }

    /// Ticker entries visible for `entity`.
    #[must_use]
    pub fn ticker(&self, entity: Option<&Entity>) -> Vec<ContentItem> {
        filter_by_entity(&merge_ticker(&self.events, &self.projects, &self.news), entity)
    }

    /// News cards visible for `entity`.
    #[must_use]
    pub fn featured_news(&self, entity: Option<&Entity>) -> Vec<ContentItem> {
        let news = self.news.loaded().map(Vec::as_slice).unwrap_or_default();
        filter_by_entity(news, entity)
            .into_iter()
            .take(FEATURED_NEWS_CARDS)
            .collect()
    }
}
