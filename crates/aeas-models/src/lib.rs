#![forbid(unsafe_code)]
#![warn(
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
//! Shared HTTP DTOs for the school group backend.
//!
//! These types describe the JSON contract consumed by the website: content
//! listings, menus, holidays, permissions, FAQs and the public mailer. List
//! endpoints take explicit filter structs that validate themselves before they
//! are serialised into a query string, so no request is built from an
//! unchecked bag of optional values.

pub mod content;
pub mod error;
pub mod faq;
pub mod holidays;
pub mod mailer;
pub mod menu;
pub mod pagination;
pub mod permissions;
pub mod query;

mod ident;

pub use content::{Author, Category, Comment, ContentFilters, ContentItem, ContentKind, FeaturedImage};
pub use error::{ErrorBody, ErrorMessage, ValidationError};
pub use faq::{FaqItem, LocalizedText};
pub use holidays::{
    CreateHolidayRequest, Holiday, HolidayFilters, HolidaySortField, HolidayType, SortOrder,
    UpdateHolidayRequest,
};
pub use mailer::{ContactMessage, MailerResponse, NewsletterSubscription, is_valid_email};
pub use menu::{MenuItem, sort_menu};
pub use pagination::{PageMeta, Paginated};
pub use permissions::{Permission, PermissionFilters};
pub use query::{ListFilters, QueryString};
