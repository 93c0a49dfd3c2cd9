//! Permission lookups. The website only reads them; enforcement lives in
//! the backend.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::ident;
use crate::query::{ListFilters, QueryString, check_page, check_page_size};

/// Largest page size the permissions endpoint accepts.
pub const MAX_PERMISSION_LIMIT: u32 = 100;

/// Permission record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    /// Permission id.
    #[serde(deserialize_with = "ident::deserialize")]
    pub id: String,
    /// Stable code, e.g. `news.publish`.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Category.
    #[serde(default)]
    pub category: Option<String>,
    /// Owning module.
    #[serde(default)]
    pub module: Option<String>,
    /// Whether the permission is active.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

const fn default_active() -> bool {
    true
}

/// Filters for `GET /permissions`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionFilters {
    /// Category.
    pub category: Option<String>,
    /// Module.
    pub module: Option<String>,
    /// Restrict to these codes.
    pub codes: Vec<String>,
    /// Active flag.
    pub is_active: Option<bool>,
    /// Free-text search.
    pub search: Option<String>,
    /// Page number (1-based).
    pub page: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
}

impl ListFilters for PermissionFilters {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(code) = self.codes.iter().find(|code| code.trim().is_empty()) {
            return Err(ValidationError::invalid("codes", "blank_code", code));
        }
        check_page("page", self.page)?;
        check_page_size("limit", self.limit, MAX_PERMISSION_LIMIT)
    }

    fn to_query(&self) -> QueryString {
        let mut query = QueryString::new();
        query
            .push_text("category", self.category.as_deref())
            .push_text("module", self.module.as_deref())
            .push_all("codes", &self.codes)
            .push_opt("isActive", self.is_active)
            .push_text("search", self.search.as_deref())
            .push_opt("page", self.page)
            .push_opt("limit", self.limit);
        query
    }
}
