//! Content items (news, events, projects) and their listing filters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::ident;
use crate::query::{ListFilters, QueryString, check_page, check_page_size};

/// Largest page size the content endpoint accepts.
pub const MAX_CONTENT_PAGE_SIZE: u32 = 100;

/// Type discriminator of a content item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// Blog/news post.
    News,
    /// Dated event.
    Event,
    /// School project.
    Project,
}

impl ContentKind {
    /// Wire identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::News => "news",
            Self::Event => "event",
            Self::Project => "project",
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Author attribution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Author {
    /// Display name.
    pub name: String,
}

/// Content category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Category id.
    #[serde(deserialize_with = "ident::deserialize")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Optional URL slug.
    #[serde(default)]
    pub slug: Option<String>,
}

/// Featured image reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeaturedImage {
    /// Absolute or backend-relative URL.
    pub url: String,
    /// Alternative text.
    #[serde(default)]
    pub alt: Option<String>,
}

/// Reader comment. `parent_id` links a reply to its top-level comment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Comment id.
    #[serde(deserialize_with = "ident::deserialize")]
    pub id: String,
    /// Parent comment id for replies.
    #[serde(default, deserialize_with = "ident::deserialize_opt")]
    pub parent_id: Option<String>,
    /// Commenter display name.
    pub author_name: String,
    /// Plain-text body.
    pub content: String,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Backend content item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    /// Item id.
    #[serde(deserialize_with = "ident::deserialize")]
    pub id: String,
    /// URL slug.
    pub slug: String,
    /// Title.
    pub title: String,
    /// Short summary.
    #[serde(default)]
    pub excerpt: Option<String>,
    /// HTML body.
    #[serde(default)]
    pub content: Option<String>,
    /// Type discriminator.
    #[serde(default, rename = "type")]
    pub kind: Option<ContentKind>,
    /// Publication timestamp.
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    /// Author attribution.
    #[serde(default)]
    pub author: Option<Author>,
    /// Categories.
    #[serde(default)]
    pub categories: Option<Vec<Category>>,
    /// Featured image.
    #[serde(default)]
    pub featured_image: Option<FeaturedImage>,
    /// Featured ("destaque") flag.
    #[serde(default, alias = "destaque")]
    pub featured: bool,
    /// School entities the item is scoped to; absent means every entity.
    #[serde(default)]
    pub entidades: Option<Vec<String>>,
    /// Event start.
    #[serde(default)]
    pub starts_at: Option<DateTime<Utc>>,
    /// Event end.
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,
    /// Event location.
    #[serde(default)]
    pub location: Option<String>,
    /// Flat comment list.
    #[serde(default)]
    pub comments: Option<Vec<Comment>>,
}

impl ContentItem {
    /// Author display name, if attributed.
    #[must_use]
    pub fn author_name(&self) -> Option<&str> {
        self.author.as_ref().map(|author| author.name.as_str())
    }

    /// Category names in backend order.
    #[must_use]
    pub fn category_names(&self) -> Vec<&str> {
        self.categories
            .iter()
            .flatten()
            .map(|category| category.name.as_str())
            .collect()
    }
}

/// Filters for `GET /public/content`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContentFilters {
    /// Restrict to one content type.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ContentKind>,
    /// Page number (1-based).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Only featured items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_only: Option<bool>,
    /// Language code of the requested translation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// School entity value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entidade: Option<String>,
    /// Category slug.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Free-text search.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl ContentFilters {
    /// Filters for one content type.
    #[must_use]
    pub fn of_kind(kind: ContentKind) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    /// Same filters pointing at `page`.
    #[must_use]
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: Some(page),
            ..self.clone()
        }
    }

    /// Requested page, defaulting to the first.
    #[must_use]
    pub fn page_or_first(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }
}

impl ListFilters for ContentFilters {
    fn validate(&self) -> Result<(), ValidationError> {
        check_page("page", self.page)?;
        check_page_size("pageSize", self.page_size, MAX_CONTENT_PAGE_SIZE)?;
        if let Some(language) = &self.language {
            if language.len() != 2 || !language.chars().all(|ch| ch.is_ascii_lowercase()) {
                return Err(ValidationError::invalid("language", "not_a_language_code", language));
            }
        }
        Ok(())
    }

    fn to_query(&self) -> QueryString {
        let mut query = QueryString::new();
        query
            .push_opt("type", self.kind)
            .push_opt("page", self.page)
            .push_opt("pageSize", self.page_size)
            .push_opt("featuredOnly", self.featured_only)
            .push_text("language", self.language.as_deref())
            .push_text("entidade", self.entidade.as_deref())
            .push_text("category", self.category.as_deref())
            .push_text("search", self.search.as_deref());
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_item_decodes_backend_shape() -> Result<(), serde_json::Error> {
        let item: ContentItem = serde_json::from_str(
            r#"{
                "id": 12,
                "slug": "feira-ciencia",
                "title": "Feira de Ciência",
                "type": "event",
                "publishedAt": "2025-03-01T09:30:00.000Z",
                "author": {"name": "Direção"},
                "categories": [{"id": 1, "name": "Ciência"}],
                "destaque": true,
                "entidades": ["esas"],
                "comments": [
                    {"id": 1, "authorName": "Ana", "content": "Parabéns"},
                    {"id": 2, "parentId": 1, "authorName": "Rui", "content": "Obrigado"}
                ]
            }"#,
        )?;
        assert_eq!(item.id, "12");
        assert_eq!(item.kind, Some(ContentKind::Event));
        assert!(item.featured);
        assert_eq!(item.author_name(), Some("Direção"));
        assert_eq!(item.category_names(), vec!["Ciência"]);
        let comments = item.comments.unwrap_or_default();
        assert_eq!(comments[1].parent_id.as_deref(), Some("1"));
        Ok(())
    }

    #[test]
    fn filters_serialise_only_present_fields() -> Result<(), ValidationError> {
        let filters = ContentFilters {
            kind: Some(ContentKind::News),
            page: Some(2),
            page_size: Some(9),
            featured_only: Some(true),
            language: Some("pt".to_string()),
            ..ContentFilters::default()
        };
        assert_eq!(
            filters.query_path("/public/content")?,
            "/public/content?type=news&page=2&pageSize=9&featuredOnly=true&language=pt"
        );
        assert_eq!(
            ContentFilters::default().query_path("/public/content")?,
            "/public/content"
        );
        Ok(())
    }

    #[test]
    fn filters_reject_invalid_values() {
        let zero_page = ContentFilters {
            page: Some(0),
            ..ContentFilters::default()
        };
        assert_eq!(zero_page.validate().map_err(|err| err.field()), Err("page"));

        let huge_page = ContentFilters {
            page_size: Some(500),
            ..ContentFilters::default()
        };
        assert_eq!(huge_page.validate().map_err(|err| err.field()), Err("pageSize"));

        let bad_language = ContentFilters {
            language: Some("PT-pt".to_string()),
            ..ContentFilters::default()
        };
        assert!(bad_language.validate().is_err());
    }

    #[test]
    fn with_page_keeps_other_filters() {
        let filters = ContentFilters {
            search: Some("robótica".to_string()),
            ..ContentFilters::of_kind(ContentKind::Project)
        };
        let next = filters.with_page(3);
        assert_eq!(next.page, Some(3));
        assert_eq!(next.kind, Some(ContentKind::Project));
        assert_eq!(next.search.as_deref(), Some("robótica"));
        assert_eq!(filters.page_or_first(), 1);
    }
}
