//! Language switcher in the header.
//!
//! # Design
//! - Presentation only; the selection is emitted to the caller.

use yew::prelude::*;

use crate::i18n::LocaleCode;

#[derive(Properties, PartialEq)]
pub(crate) struct LocaleMenuProps {
    pub locale: LocaleCode,
    pub label: AttrValue,
    pub on_select: Callback<LocaleCode>,
}

fn flag_src(locale: LocaleCode) -> String {
    format!("https://flagcdn.com/{}.svg", locale.flag())
}

#[function_component(LocaleMenu)]
pub(crate) fn locale_menu(props: &LocaleMenuProps) -> Html {
    let open = use_state(|| false);
    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    html! {
        <div class={classes!("dropdown", "locale-menu", open.then_some("open"))}>
            <button
                type="button"
                class="btn ghost"
                aria-haspopup="listbox"
                aria-expanded={open.to_string()}
                aria-label={props.label.clone()}
                onclick={toggle}
            >
                <img src={flag_src(props.locale)} alt="" class="flag" />
                <span>{props.locale.code().to_uppercase()}</span>
            </button>
            if *open {
                <ul class="dropdown-content" role="listbox">
                    {for LocaleCode::all().into_iter().map(|locale| {
                        let on_select = props.on_select.clone();
                        let open = open.clone();
                        let onclick = Callback::from(move |_: MouseEvent| {
                            open.set(false);
                            on_select.emit(locale);
                        });
                        let selected = locale == props.locale;
                        html! {
                            <li role="option" aria-selected={selected.to_string()}>
                                <button type="button" class={classes!(selected.then_some("active"))} {onclick}>
                                    <img src={flag_src(locale)} alt="" class="flag" />
                                    <span>{locale.label()}</span>
                                </button>
                            </li>
                        }
                    })}
                </ul>
            }
        </div>
    }
}
