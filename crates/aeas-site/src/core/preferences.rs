//! Persisted visitor preferences (language, theme, school entity).
//!
//! # Design
//! - Storage access goes through [`PreferenceStore`] so resolution runs
//!   natively in tests and against `localStorage` in the browser.
//! - Values are written as `v1:<value>`. Untagged values from older builds
//!   are accepted once and rewritten; values with any other version tag are
//!   dropped together with their key.
//! - Initial resolution order is fixed: storage, then the browser/system
//!   hint, then the compiled-in default.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::core::entities::Entity;
use crate::core::theme::ThemeMode;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode};

/// Storage key for the selected language.
pub const LANGUAGE_KEY: &str = "aeas.language";
/// Storage key for the selected theme.
pub const THEME_KEY: &str = "aeas.theme";
/// Storage key for the selected school entity.
pub const ENTITY_KEY: &str = "aeas.entidade";

const VERSION_TAG: &str = "v1";

/// Minimal key/value storage used for preferences.
pub trait PreferenceStore {
    /// Raw value stored under `key`.
    fn read(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`.
    fn write(&self, key: &str, value: &str);
    /// Delete `key`.
    fn remove(&self, key: &str);
}

/// In-memory store; backs [`FallbackStore`] when `localStorage` is blocked.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    /// Store pre-populated with `entries`.
    #[must_use]
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::default();
        for (key, value) in entries {
            store.write(key, value);
        }
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Persistent store when one could be opened, otherwise an in-memory map
/// that keeps preferences for the lifetime of the page.
#[derive(Debug)]
pub struct FallbackStore<P> {
    primary: Option<P>,
    memory: MemoryStore,
}

impl<P: PreferenceStore> FallbackStore<P> {
    /// Wrap `primary`; `None` means persistent storage is unavailable.
    #[must_use]
    pub fn new(primary: Option<P>) -> Self {
        Self {
            primary,
            memory: MemoryStore::default(),
        }
    }

    /// Whether values survive a reload.
    #[must_use]
    pub const fn is_persistent(&self) -> bool {
        self.primary.is_some()
    }
}

impl<P: PreferenceStore> PreferenceStore for FallbackStore<P> {
    fn read(&self, key: &str) -> Option<String> {
        match &self.primary {
            Some(primary) => primary.read(key),
            None => self.memory.read(key),
        }
    }

    fn write(&self, key: &str, value: &str) {
        match &self.primary {
            Some(primary) => primary.write(key, value),
            None => self.memory.write(key, value),
        }
    }

    fn remove(&self, key: &str) {
        match &self.primary {
            Some(primary) => primary.remove(key),
            None => self.memory.remove(key),
        }
    }
}

/// A value that can be persisted under a fixed key.
pub trait Preference: Sized {
    /// Storage key.
    const KEY: &'static str;

    /// Plain (untagged) storage representation.
    fn storage_value(&self) -> &str;

    /// Parse a plain storage representation.
    fn from_storage_value(value: &str) -> Option<Self>;
}

impl Preference for LocaleCode {
    const KEY: &'static str = LANGUAGE_KEY;

    fn storage_value(&self) -> &str {
        self.code()
    }

    fn from_storage_value(value: &str) -> Option<Self> {
        Self::all().into_iter().find(|locale| locale.code() == value)
    }
}

impl Preference for ThemeMode {
    const KEY: &'static str = THEME_KEY;

    fn storage_value(&self) -> &str {
        self.as_str()
    }

    fn from_storage_value(value: &str) -> Option<Self> {
        Self::parse(value)
    }
}

impl Preference for Entity {
    const KEY: &'static str = ENTITY_KEY;

    fn storage_value(&self) -> &str {
        self.value
    }

    fn from_storage_value(value: &str) -> Option<Self> {
        Self::by_value(value)
    }
}

/// Shape of a raw stored string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoredValue<'a> {
    /// Tagged with the current version.
    Current(&'a str),
    /// Written before values were versioned.
    Legacy(&'a str),
    /// Tagged with a version this build does not understand.
    Unknown,
}

/// Classify a raw stored string.
#[must_use]
pub fn decode(raw: &str) -> StoredValue<'_> {
    match raw.split_once(':') {
        Some((tag, value)) if is_version_tag(tag) => {
            if tag == VERSION_TAG {
                StoredValue::Current(value)
            } else {
                StoredValue::Unknown
            }
        }
        _ => StoredValue::Legacy(raw.trim()),
    }
}

/// Tagged representation written to storage.
#[must_use]
pub fn encode(value: &str) -> String {
    format!("{VERSION_TAG}:{value}")
}

fn is_version_tag(tag: &str) -> bool {
    tag.strip_prefix('v')
        .is_some_and(|digits| !digits.is_empty() && digits.chars().all(|ch| ch.is_ascii_digit()))
}

/// Load a preference, migrating legacy values and removing invalid ones.
pub fn load<P: Preference>(store: &impl PreferenceStore) -> Option<P> {
    let raw = store.read(P::KEY)?;
    let parsed = match decode(&raw) {
        StoredValue::Current(value) => P::from_storage_value(value),
        StoredValue::Legacy(value) => {
            let parsed = P::from_storage_value(value);
            if let Some(preference) = &parsed {
                persist(store, preference);
            }
            parsed
        }
        StoredValue::Unknown => None,
    };
    if parsed.is_none() {
        store.remove(P::KEY);
    }
    parsed
}

/// Write a preference in the current format.
pub fn persist<P: Preference>(store: &impl PreferenceStore, preference: &P) {
    store.write(P::KEY, &encode(preference.storage_value()));
}

/// Remove a preference.
pub fn clear<P: Preference>(store: &impl PreferenceStore) {
    store.remove(P::KEY);
}

/// Language at mount: storage, then the browser language tag, then Portuguese.
pub fn initial_language(store: &impl PreferenceStore, browser_tag: Option<&str>) -> LocaleCode {
    load::<LocaleCode>(store)
        .or_else(|| browser_tag.and_then(LocaleCode::from_lang_tag))
        .unwrap_or(DEFAULT_LOCALE)
}

/// Theme at mount: storage, then `prefers-color-scheme`, then light.
pub fn initial_theme(store: &impl PreferenceStore, prefers_dark: Option<bool>) -> ThemeMode {
    load::<ThemeMode>(store)
        .or_else(|| prefers_dark.map(ThemeMode::from_prefers_dark))
        .unwrap_or_default()
}

/// Entity at mount: storage only; nothing selected otherwise.
pub fn initial_entity(store: &impl PreferenceStore) -> Option<Entity> {
    load::<Entity>(store)
}

/// Preference value plus whether storage-dependent initialisation finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<T> {
    /// Current value (the default until ready).
    pub value: T,
    /// Whether the value came out of initialisation.
    pub is_ready: bool,
}

impl<T> Resolved<T> {
    /// Placeholder shown before initialisation.
    pub const fn pending(value: T) -> Self {
        Self {
            value,
            is_ready: false,
        }
    }

    /// Initialised value.
    pub const fn ready(value: T) -> Self {
        Self {
            value,
            is_ready: true,
        }
    }
}
