//! Frequently asked questions.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
