use gloo::console;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::app::api::use_api;
use crate::app::context::{use_bundle, use_entity, use_language};
use crate::components::empty_state::{EmptyState, EmptyTone};
use crate::components::faq_accordion::FaqAccordion;
use crate::features::faq::state::{FaqState, FaqView};

#[function_component(FaqPage)]
pub(crate) fn faq_page() -> Html {
    let bundle = use_bundle();
    let language = use_language();
    let entity = use_entity();
    let client = use_api();
    let state = use_state(FaqState::default);
    let search = use_state(String::new);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |(language, ready)| {
                if *ready {
                    state.set(FaqState::Loading);
                    let language = language.code();
                    spawn_local(async move {
                        match client.fetch_faq(language).await {
                            Ok(items) => state.set(FaqState::Loaded(items)),
                            Err(err) => {
                                console::error!(format!("faq failed: {err}"));
                                state.set(FaqState::Failed);
                            }
                        }
                    });
                }
                || ()
            },
            (language.language, language.is_ready),
        );
    }

    let oninput = {
        let search = search.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                search.set(input.value());
            }
        })
    };

    let code = language.language.code();
    let view = state.view(&search, code, entity.selected.as_ref());
    let body = match view {
        FaqView::Items(items) => html! {
            <FaqAccordion {items} language={AttrValue::from(code)} />
        },
        other => {
            let tone = match other {
                FaqView::Loading => EmptyTone::Loading,
                FaqView::Failed => EmptyTone::Error,
                _ => EmptyTone::Neutral,
            };
            let message = other
                .message_key()
                .map(|key| bundle.text(key, ""))
                .unwrap_or_default();
            html! { <EmptyState {tone} {message} /> }
        }
    };

    html! {
        <section class="page faq-page">
            <header class="page-header">
                <h1>{bundle.text("faq.title", "Perguntas frequentes")}</h1>
                <p class="lead">{bundle.text("faq.subtitle", "")}</p>
            </header>
            <label class="search-field">
                <span class="sr-only">{bundle.text("faq.search_label", "Pesquisar")}</span>
                <input
                    type="search"
                    placeholder={bundle.text("faq.search_placeholder", "Pesquisar perguntas…")}
                    value={(*search).clone()}
                    {oninput}
                />
            </label>
            {body}
        </section>
    }
}
