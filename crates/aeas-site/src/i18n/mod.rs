//! JSON-backed translations for the two site languages.

use serde::Deserialize;
use serde_json::Value;
use std::sync::LazyLock;

/// Languages the site is published in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleCode {
    /// Portuguese.
    Pt,
    /// English.
    En,
}

impl LocaleCode {
    #[must_use]
    /// All supported locales in display order.
    pub const fn all() -> [Self; 2] {
        [Self::Pt, Self::En]
    }

    /// Two-letter language code, also sent to the backend as `language`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Pt => "pt",
            Self::En => "en",
        }
    }

    /// Human-friendly label for dropdowns.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pt => "Português",
            Self::En => "English",
        }
    }

    /// Flag shown next to the label.
    #[must_use]
    pub const fn flag(self) -> &'static str {
        match self {
            Self::Pt => "pt",
            Self::En => "gb",
        }
    }

    /// Map an arbitrary browser language tag (`pt-PT`, `en_GB`, `EN`) to a
    /// supported locale by its primary subtag.
    #[must_use]
    pub fn from_lang_tag(tag: &str) -> Option<Self> {
        let lowered = tag.trim().to_ascii_lowercase();
        let base = lowered.split(['-', '_']).next().unwrap_or_default();
        Self::all()
            .iter()
            .copied()
            .find(|locale| locale.code() == base)
    }
}

/// Default locale when neither storage nor the browser yields one.
pub const DEFAULT_LOCALE: LocaleCode = LocaleCode::Pt;

/// Translation bundle containing a parsed JSON tree for the locale.
#[derive(Clone, Debug)]
pub struct TranslationBundle {
    /// Locale backing this bundle.
    pub locale: LocaleCode,
    tree: Value,
}

impl PartialEq for TranslationBundle {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale
    }
}

impl TranslationBundle {
    /// Build a translation bundle for the given locale.
    ///
    /// Keys missing from the bundle resolve through the Portuguese bundle,
    /// which is the authoring language of the site.
    #[must_use]
    pub fn new(locale: LocaleCode) -> Self {
        let tree: Value = serde_json::from_str(raw_locale(locale)).unwrap_or(Value::Null);
        Self { locale, tree }
    }

    /// Resolve a dotted path (`section.key`) with Portuguese fallback and caller default.
    #[must_use]
    pub fn text(&self, path: &str, default: &str) -> String {
        resolve(&self.tree, path)
            .or_else(|| resolve(&PT_FALLBACK.tree, path))
            .unwrap_or_else(|| default.to_string())
    }

    /// Resolve `path` and substitute `{name}` placeholders.
    #[must_use]
    pub fn format(&self, path: &str, default: &str, args: &[(&str, &str)]) -> String {
        args.iter()
            .fold(self.text(path, default), |text, (name, value)| {
                text.replace(&format!("{{{name}}}"), value)
            })
    }

    /// Language code of the bundle.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.locale.code()
    }
}

static PT_FALLBACK: LazyLock<TranslationBundle> =
    LazyLock::new(|| TranslationBundle::new(DEFAULT_LOCALE));

fn resolve(tree: &Value, path: &str) -> Option<String> {
    let mut node = tree;
    for segment in path.split('.') {
        node = node.get(segment)?;
    }
    node.as_str().map(ToString::to_string)
}

const fn raw_locale(locale: LocaleCode) -> &'static str {
    match locale {
        LocaleCode::Pt => include_str!("../../i18n/pt.json"),
        LocaleCode::En => include_str!("../../i18n/en.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lang_tags_match_primary_subtag() {
        assert_eq!(LocaleCode::from_lang_tag("pt-BR"), Some(LocaleCode::Pt));
        assert_eq!(LocaleCode::from_lang_tag("EN_gb"), Some(LocaleCode::En));
        assert_eq!(LocaleCode::from_lang_tag("fr-FR"), None);
        assert_eq!(LocaleCode::from_lang_tag(""), None);
    }

    #[test]
    fn missing_key_falls_back_to_default() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        assert_eq!(bundle.text("nonexistent.key", "fallback"), "fallback");
    }

    #[test]
    fn bundles_share_navigation_keys() {
        for locale in LocaleCode::all() {
            let bundle = TranslationBundle::new(locale);
            assert_eq!(bundle.locale, locale);
            assert!(!bundle.text("nav.home", "").is_empty());
            assert!(!bundle.text("newsletter.already_subscribed", "").is_empty());
        }
        assert_eq!(TranslationBundle::new(LocaleCode::En).text("nav.news", ""), "News");
        assert_eq!(TranslationBundle::new(LocaleCode::Pt).text("nav.news", ""), "Notícias");
    }

    #[test]
    fn format_substitutes_named_placeholders() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        assert_eq!(
            bundle.format("pagination.page_of", "", &[("page", "2"), ("total", "7")]),
            "Page 2 of 7"
        );
    }
}
