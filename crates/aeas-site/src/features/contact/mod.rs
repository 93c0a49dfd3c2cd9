//! Contact page.

#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
