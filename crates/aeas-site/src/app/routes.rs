//! Routing definitions for the site.
use yew_router::prelude::*;

use crate::features::content::state::ContentSection;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/sobre")]
    About,
    #[at("/eventos")]
    Events,
    #[at("/eventos/:slug")]
    Event { slug: String },
    #[at("/projetos")]
    Projects,
    #[at("/projetos/:slug")]
    Project { slug: String },
    #[at("/noticias")]
    News,
    #[at("/noticias/:slug")]
    Article { slug: String },
    #[at("/faq")]
    Faq,
    #[at("/secretaria")]
    Secretary,
    #[at("/contactos")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Listing route of a content section.
    pub(crate) const fn list(section: ContentSection) -> Self {
        match section {
            ContentSection::Events => Self::Events,
            ContentSection::Projects => Self::Projects,
            ContentSection::News => Self::News,
        }
    }

    /// Detail route of an item in a content section.
    pub(crate) fn detail(section: ContentSection, slug: &str) -> Self {
        let slug = slug.to_string();
        match section {
            ContentSection::Events => Self::Event { slug },
            ContentSection::Projects => Self::Project { slug },
            ContentSection::News => Self::Article { slug },
        }
    }

    /// Section a route belongs to, for highlighting the navigation.
    pub(crate) const fn section(&self) -> Option<ContentSection> {
        match self {
            Self::Events | Self::Event { .. } => Some(ContentSection::Events),
            Self::Projects | Self::Project { .. } => Some(ContentSection::Projects),
            Self::News | Self::Article { .. } => Some(ContentSection::News),
            _ => None,
        }
    }
}
