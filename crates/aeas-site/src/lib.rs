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
//! Website of the Agrupamento de Escolas António Sérgio.
//!
//! This crate holds the Yew front-end entry point plus the logic behind it:
//! persisted visitor preferences, school scoping, pagination, translations
//! and the REST client for the school backend.

pub mod core;
pub mod features;
pub mod i18n;
pub mod models;
pub mod services;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
