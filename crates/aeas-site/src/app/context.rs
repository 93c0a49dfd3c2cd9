//! Visitor preference providers (language, theme, school entity).
//!
//! # Design
//! - Each provider starts from its default with `is_ready == false`, then
//!   resolves storage and browser hints once on mount.
//! - The setter is the only writer: it updates state and persists.
//! - Hooks used outside their provider panic in debug builds; release builds
//!   log to the console and fall back to the default value.

use gloo::console;
use yew::prelude::*;

use crate::app::preferences::{
    BrowserStorage, apply_language, apply_theme, browser_language, prefers_dark,
};
use crate::core::entities::{Entity, EntityScoped, filter_by_entity};
use crate::core::preferences::{
    Resolved, clear, initial_entity, initial_language, initial_theme, persist,
};
use crate::core::theme::ThemeMode;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode, TranslationBundle};

/// Language context value.
#[derive(Clone, PartialEq)]
pub(crate) struct LanguageCtx {
    pub language: LocaleCode,
    pub is_ready: bool,
    pub set_language: Callback<LocaleCode>,
}

impl LanguageCtx {
    pub(crate) const fn supported(&self) -> [LocaleCode; 2] {
        LocaleCode::all()
    }
}

/// Theme context value.
#[derive(Clone, PartialEq)]
pub(crate) struct ThemeCtx {
    pub theme: ThemeMode,
    pub is_ready: bool,
    pub set_theme: Callback<ThemeMode>,
}

/// Entity selection context value.
#[derive(Clone, PartialEq)]
pub(crate) struct EntityCtx {
    pub selected: Option<Entity>,
    pub is_ready: bool,
    pub set_selected: Callback<Option<Entity>>,
}

impl EntityCtx {
    /// Items visible for the current selection.
    pub(crate) fn filter<T: EntityScoped + Clone>(&self, items: &[T]) -> Vec<T> {
        filter_by_entity(items, self.selected.as_ref())
    }

    /// Selected entity value, for backend filters.
    pub(crate) fn value(&self) -> Option<&'static str> {
        self.selected.map(|entity| entity.value)
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(LanguageProvider)]
pub(crate) fn language_provider(props: &ProviderProps) -> Html {
    let state = use_state(|| Resolved::pending(DEFAULT_LOCALE));
    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let language = initial_language(&BrowserStorage, browser_language().as_deref());
                state.set(Resolved::ready(language));
                || ()
            },
            (),
        );
    }
    {
        let language = state.value;
        use_effect_with_deps(
            move |language| {
                apply_language(*language);
                || ()
            },
            language,
        );
    }
    let set_language = {
        let state = state.clone();
        Callback::from(move |language: LocaleCode| {
            persist(&BrowserStorage, &language);
            state.set(Resolved::ready(language));
        })
    };
    let bundle = {
        let language = state.value;
        use_memo(move |language| TranslationBundle::new(*language), language)
    };
    let context = LanguageCtx {
        language: state.value,
        is_ready: state.is_ready,
        set_language,
    };

    html! {
        <ContextProvider<LanguageCtx> context={context}>
            <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
                { for props.children.iter() }
            </ContextProvider<TranslationBundle>>
        </ContextProvider<LanguageCtx>>
    }
}

#[function_component(ThemeProvider)]
pub(crate) fn theme_provider(props: &ProviderProps) -> Html {
    let state = use_state(|| Resolved::pending(ThemeMode::default()));
    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                state.set(Resolved::ready(initial_theme(&BrowserStorage, prefers_dark())));
                || ()
            },
            (),
        );
    }
    {
        let theme = state.value;
        use_effect_with_deps(
            move |theme| {
                apply_theme(*theme);
                || ()
            },
            theme,
        );
    }
    let set_theme = {
        let state = state.clone();
        Callback::from(move |theme: ThemeMode| {
            persist(&BrowserStorage, &theme);
            state.set(Resolved::ready(theme));
        })
    };
    let context = ThemeCtx {
        theme: state.value,
        is_ready: state.is_ready,
        set_theme,
    };

    html! {
        <ContextProvider<ThemeCtx> context={context}>
            { for props.children.iter() }
        </ContextProvider<ThemeCtx>>
    }
}

#[function_component(EntityProvider)]
pub(crate) fn entity_provider(props: &ProviderProps) -> Html {
    let state = use_state(|| Resolved::pending(None::<Entity>));
    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                state.set(Resolved::ready(initial_entity(&BrowserStorage)));
                || ()
            },
            (),
        );
    }
    let set_selected = {
        let state = state.clone();
        Callback::from(move |selected: Option<Entity>| {
            match &selected {
                Some(entity) => persist(&BrowserStorage, entity),
                None => clear::<Entity>(&BrowserStorage),
            }
            state.set(Resolved::ready(selected));
        })
    };
    let context = EntityCtx {
        selected: state.value,
        is_ready: state.is_ready,
        set_selected,
    };

    html! {
        <ContextProvider<EntityCtx> context={context}>
            { for props.children.iter() }
        </ContextProvider<EntityCtx>>
    }
}

fn missing_provider<T>(hook: &'static str, provider: &'static str, fallback: T) -> T {
    assert!(
        !cfg!(debug_assertions),
        "{hook} must be used within {provider}"
    );
    console::error!(format!("{hook} used outside {provider}; using defaults"));
    fallback
}

#[hook]
pub(crate) fn use_language() -> LanguageCtx {
    use_context::<LanguageCtx>().unwrap_or_else(|| {
        missing_provider(
            "use_language",
            "LanguageProvider",
            LanguageCtx {
                language: DEFAULT_LOCALE,
                is_ready: true,
                set_language: Callback::from(|_| ()),
            },
        )
    })
}

#[hook]
pub(crate) fn use_theme() -> ThemeCtx {
    use_context::<ThemeCtx>().unwrap_or_else(|| {
        missing_provider(
            "use_theme",
            "ThemeProvider",
            ThemeCtx {
                theme: ThemeMode::default(),
                is_ready: true,
                set_theme: Callback::from(|_| ()),
            },
        )
    })
}

#[hook]
pub(crate) fn use_entity() -> EntityCtx {
    use_context::<EntityCtx>().unwrap_or_else(|| {
        missing_provider(
            "use_entity",
            "EntityProvider",
            EntityCtx {
                selected: None,
                is_ready: true,
                set_selected: Callback::from(|_| ()),
            },
        )
    })
}

#[hook]
pub(crate) fn use_bundle() -> TranslationBundle {
    use_context::<TranslationBundle>().unwrap_or_else(|| {
        missing_provider(
            "use_bundle",
            "LanguageProvider",
            TranslationBundle::new(DEFAULT_LOCALE),
        )
    })
}
