//! Listing state for events, projects and news.

use aeas_models::{ContentFilters, ContentItem, ContentKind, PageMeta, Paginated};
use serde::{Deserialize, Serialize};

use crate::core::entities::{Entity, filter_by_entity};
use crate::services::ApiError;

/// Default page size of the listing pages.
pub const DEFAULT_PAGE_SIZE: u32 = 9;

/// One of the three content listings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentSection {
    /// Events.
    Events,
    /// Projects.
    Projects,
    /// News (blog).
    News,
}

impl ContentSection {
    /// Backend type of the section.
    #[must_use]
    pub const fn kind(self) -> ContentKind {
        match self {
            Self::Events => ContentKind::Event,
            Self::Projects => ContentKind::Project,
            Self::News => ContentKind::News,
        }
    }

    /// Translation namespace (`events`, `projects`, `news`).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Events => "events",
            Self::Projects => "projects",
            Self::News => "news",
        }
    }
}

/// Query string of a listing page (`?page=&pageSize=&category=&search=`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    /// Requested page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Requested page size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Category slug.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Free-text search.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl ListQuery {
    /// Same query pointing at `page`; the other parameters are preserved.
    #[must_use]
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: Some(page),
            ..self.clone()
        }
    }

    /// Backend filters for `section` in `language`, scoped to `entity`.
    #[must_use]
    pub fn to_filters(
        &self,
        section: ContentSection,
        language: &str,
        entity: Option<&Entity>,
    ) -> ContentFilters {
        ContentFilters {
            kind: Some(section.kind()),
            page: Some(self.page.unwrap_or(1).max(1)),
            page_size: Some(self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)),
            featured_only: None,
            language: Some(language.to_string()),
            entidade: entity.map(|entity| entity.value.to_string()),
            category: self.category.clone(),
            search: self.search.clone(),
        }
    }
}

/// Filters for the featured items of `kind` shown on the home page.
#[must_use]
pub fn featured_filters(kind: ContentKind, language: &str, limit: u32) -> ContentFilters {
    ContentFilters {
        page_size: Some(limit),
        featured_only: Some(true),
        language: Some(language.to_string()),
        ..ContentFilters::of_kind(kind)
    }
}

/// Fetch state of a listing page.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ListState {
    /// Request in flight.
    #[default]
    Loading,
    /// Request failed.
    Failed,
    /// Page received.
    Loaded(Paginated<ContentItem>),
}

/// What a listing page should render.
#[derive(Clone, Debug, PartialEq)]
pub enum ListView {
    /// Spinner.
    Loading,
    /// Error panel.
    Failed,
    /// The backend returned nothing.
    Empty,
    /// Items exist but none match the selected entity.
    FilteredOut,
    /// Cards plus pagination metadata.
    Items(Vec<ContentItem>, PageMeta),
}

impl ListState {
    /// Resolve the view for the selected entity.
    #[must_use]
    pub fn view(&self, entity: Option<&Entity>) -> ListView {
        match self {
            Self::Loading => ListView::Loading,
            Self::Failed => ListView::Failed,
            Self::Loaded(page) if page.is_empty() => ListView::Empty,
            Self::Loaded(page) => {
                let visible = filter_by_entity(&page.data, entity);
                if visible.is_empty() {
                    ListView::FilteredOut
                } else {
                    ListView::Items(visible, page.meta)
                }
            }
        }
    }
}

/// Fetch state of a detail page.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DetailState {
    /// Request in flight.
    #[default]
    Loading,
    /// The backend has no item with that slug.
    NotFound,
    /// Any other failure.
    Failed,
    /// Item received.
    Loaded(Box<ContentItem>),
}

impl DetailState {
    /// Classify a request result; a 404 is reported separately from outages.
    #[must_use]
    pub fn from_result(result: Result<ContentItem, ApiError>) -> Self {
        match result {
            Ok(item) => Self::Loaded(Box::new(item)),
            Err(err) if err.is_not_found() => Self::NotFound,
            Err(_) => Self::Failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aeas_models::ListFilters;

    fn page(items: Vec<ContentItem>) -> Paginated<ContentItem> {
        Paginated {
            meta: PageMeta {
                page: 1,
                page_size: DEFAULT_PAGE_SIZE,
                total: items.len() as u64,
                total_pages: 1,
            },
            data: items,
        }
    }

    fn tagged(id: &str, entidades: Option<&[&str]>) -> Result<ContentItem, serde_json::Error> {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "slug": format!("item-{id}"),
            "title": format!("Item {id}"),
            "entidades": entidades,
        }))
    }

    #[test]
    fn list_query_maps_to_backend_filters() -> Result<(), aeas_models::ValidationError> {
        let query = ListQuery {
            page: Some(3),
            search: Some("robótica".to_string()),
            ..ListQuery::default()
        };
        let entity = Entity::by_value("eb-cabo-mor");
        let filters = query.to_filters(ContentSection::Projects, "pt", entity.as_ref());
        assert_eq!(
            filters.query_path("/public/content")?,
            "/public/content?type=project&page=3&pageSize=9&language=pt&entidade=eb-cabo-mor&search=rob%C3%B3tica"
        );
        Ok(())
    }

    #[test]
    fn with_page_preserves_other_parameters() {
        let query = ListQuery {
            page: Some(1),
            page_size: Some(12),
            category: Some("desporto".to_string()),
            search: None,
        };
        let next = query.with_page(2);
        assert_eq!(next.page, Some(2));
        assert_eq!(next.page_size, Some(12));
        assert_eq!(next.category.as_deref(), Some("desporto"));
    }

    #[test]
    fn views_distinguish_empty_and_filtered_out() -> Result<(), serde_json::Error> {
        let entity = Entity::by_value("ji-vila-nova");
        assert_eq!(ListState::Loading.view(None), ListView::Loading);
        assert_eq!(ListState::Loaded(page(Vec::new())).view(None), ListView::Empty);

        let scoped = ListState::Loaded(page(vec![tagged("1", Some(&["eb-cabo-mor"]))?]));
        assert_eq!(scoped.view(entity.as_ref()), ListView::FilteredOut);
        assert!(matches!(scoped.view(None), ListView::Items(items, _) if items.len() == 1));
        Ok(())
    }

    #[test]
    fn featured_filters_request_destaques_only() {
        let filters = featured_filters(ContentKind::News, "en", 3);
        assert_eq!(filters.featured_only, Some(true));
        assert_eq!(filters.page_size, Some(3));
        assert_eq!(filters.kind, Some(ContentKind::News));
    }

    #[test]
    fn detail_state_separates_missing_from_failed() -> Result<(), serde_json::Error> {
        let missing = Err(ApiError::Status {
            status: 404,
            message: "Not Found".to_string(),
        });
        assert_eq!(DetailState::from_result(missing), DetailState::NotFound);

        let outage = Err(ApiError::Transport {
            detail: "offline".to_string(),
        });
        assert_eq!(DetailState::from_result(outage), DetailState::Failed);

        let item = tagged("7", None)?;
        assert_eq!(
            DetailState::from_result(Ok(item.clone())),
            DetailState::Loaded(Box::new(item))
        );
        Ok(())
    }
}
