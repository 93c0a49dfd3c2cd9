use yew::prelude::*;

use crate::app::context::{use_bundle, use_theme};
use crate::core::theme::ThemeMode;

#[function_component(ThemeToggle)]
pub(crate) fn theme_toggle() -> Html {
    let bundle = use_bundle();
    let theme = use_theme();
    let onclick = {
        let set_theme = theme.set_theme.clone();
        let next = theme.theme.toggled();
        Callback::from(move |_: MouseEvent| set_theme.emit(next))
    };
    let (icon, label) = match theme.theme {
        ThemeMode::Light => ("☾", bundle.text("header.theme_dark", "Mudar para tema escuro")),
        ThemeMode::Dark => ("☀", bundle.text("header.theme_light", "Mudar para tema claro")),
    };

    html! {
        <button
            type="button"
            class="btn ghost theme-toggle"
            aria-label={label.clone()}
            title={label}
            disabled={!theme.is_ready}
            {onclick}
        >
            <span aria-hidden="true">{icon}</span>
        </button>
    }
}
