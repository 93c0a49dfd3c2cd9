//! Page-level feature slices. Each slice keeps its pure state next to the
//! browser view that renders it.

pub mod about;
pub mod contact;
pub mod content;
pub mod faq;
pub mod home;
pub mod not_found;
pub mod secretary;
