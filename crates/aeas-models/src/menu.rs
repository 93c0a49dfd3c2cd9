//! Navigation menu served by `GET /core/menu`.

use serde::{Deserialize, Serialize};

use crate::ident;

/// Menu entry, possibly nested.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Entry id.
    #[serde(deserialize_with = "ident::deserialize")]
    pub id: String,
    /// Display label.
    pub label: String,
    /// Target URL, site-relative or absolute.
    #[serde(default)]
    pub url: Option<String>,
    /// Sort key; lower first.
    #[serde(default)]
    pub order: i32,
    /// Child entries.
    #[serde(default)]
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    /// Whether the link leaves the site.
    #[must_use]
    pub fn is_external(&self) -> bool {
        self.url
            .as_deref()
            .is_some_and(|url| url.starts_with("http://") || url.starts_with("https://"))
    }
}

/// Sort entries (and their children) by `order`, keeping backend order for ties.
pub fn sort_menu(items: &mut [MenuItem]) {
    items.sort_by_key(|item| item.order);
    for item in items.iter_mut() {
        sort_menu(&mut item.children);
    }
}
