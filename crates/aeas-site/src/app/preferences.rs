//! Browser bindings for persisted preferences and environment hints.

use gloo::console;
use gloo::utils::window;

use crate::core::preferences::{FallbackStore, PreferenceStore};
use crate::core::theme::ThemeMode;
use crate::i18n::LocaleCode;

thread_local! {
    static STORE: FallbackStore<LocalStore> = FallbackStore::new(open_local_storage());
}

/// Preference store for the page: `localStorage` when the browser allows it,
/// an in-memory map otherwise (sandboxed frames, disabled cookies).
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BrowserStorage;

impl PreferenceStore for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        STORE.with(|store| store.read(key))
    }

    fn write(&self, key: &str, value: &str) {
        STORE.with(|store| store.write(key, value));
    }

    fn remove(&self, key: &str) {
        STORE.with(|store| store.remove(key));
    }
}

struct LocalStore(web_sys::Storage);

impl PreferenceStore for LocalStore {
    fn read(&self, key: &str) -> Option<String> {
        self.0.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(err) = self.0.set_item(key, value) {
            log_storage_error("set", key, &format!("{err:?}"));
        }
    }

    fn remove(&self, key: &str) {
        if let Err(err) = self.0.remove_item(key) {
            log_storage_error("remove", key, &format!("{err:?}"));
        }
    }
}

fn open_local_storage() -> Option<LocalStore> {
    match web_sys::window()?.local_storage() {
        Ok(Some(storage)) => Some(LocalStore(storage)),
        Ok(None) => None,
        Err(err) => {
            console::warn!(format!("localStorage unavailable, preferences kept in memory: {err:?}"));
            None
        }
    }
}

/// `navigator.language`, when exposed.
pub(crate) fn browser_language() -> Option<String> {
    window().navigator().language()
}

/// Result of the `prefers-color-scheme: dark` media query, when available.
pub(crate) fn prefers_dark() -> Option<bool> {
    window()
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map(|query| query.matches())
}

/// Reflect the theme on the root element.
pub(crate) fn apply_theme(theme: ThemeMode) {
    if let Some(root) = window()
        .document()
        .and_then(|document| document.document_element())
    {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

/// Keep `<html lang>` in sync with the selected language.
pub(crate) fn apply_language(locale: LocaleCode) {
    if let Some(root) = window()
        .document()
        .and_then(|document| document.document_element())
    {
        let _ = root.set_attribute("lang", locale.code());
    }
}

/// Scroll back to the top after client-side navigation.
pub(crate) fn scroll_to_top() {
    window().scroll_to_with_x_and_y(0.0, 0.0);
}

fn log_storage_error(operation: &'static str, key: &str, detail: &str) {
    console::error!("storage operation failed", operation, key.to_string(), detail.to_string());
}
