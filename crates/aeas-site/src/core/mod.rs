//! Browser-independent site logic. Everything here builds and is tested
//! natively; the wasm views only render what these modules compute.

pub mod accordion;
pub mod comments;
pub mod entities;
pub mod format;
pub mod forms;
pub mod pagination;
pub mod preferences;
pub mod store;
pub mod theme;
pub mod ticker;
