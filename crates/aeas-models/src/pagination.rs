//! Paginated list envelope.

use serde::{Deserialize, Serialize};

/// Pagination metadata reported by the backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Current page (1-based).
    pub page: u32,
    /// Page size used for the query.
    #[serde(alias = "limit")]
    pub page_size: u32,
    /// Total number of matching items.
    #[serde(default)]
    pub total: u64,
    /// Total number of pages.
    pub total_pages: u32,
}

impl PageMeta {
    /// Whether more than one page exists.
    #[must_use]
    pub const fn is_paged(&self) -> bool {
        self.total_pages > 1
    }
}

/// A page of `T` plus its metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Paginated<T> {
    /// Items on this page.
    pub data: Vec<T>,
    /// Pagination metadata.
    pub meta: PageMeta,
}

impl<T> Paginated<T> {
    /// Whether the page holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_accepts_limit_alias() -> Result<(), serde_json::Error> {
        let page: Paginated<u8> = serde_json::from_str(
            r#"{"data":[1,2],"meta":{"page":1,"limit":2,"total":5,"totalPages":3}}"#,
        )?;
        assert_eq!(page.meta.page_size, 2);
        assert!(page.meta.is_paged());
        assert!(!page.is_empty());
        Ok(())
    }
}
