//! Single-open FAQ accordion.
//!
//! # Design
//! - Open state lives in the parent as an [`AccordionState`]; opening one
//!   entry closes the others.
//! - Each panel measures its content height on mount and whenever its text
//!   changes, while collapsed, so the opening frame already carries a pixel
//!   `max-height` for the CSS transition.

use aeas_models::FaqItem;
use yew::prelude::*;

use crate::components::html_block::RawHtml;
use crate::core::accordion::{AccordionState, PanelHeight};

#[derive(Properties, PartialEq)]
pub(crate) struct FaqAccordionProps {
    pub items: Vec<FaqItem>,
    pub language: AttrValue,
}

#[function_component(FaqAccordion)]
pub(crate) fn faq_accordion(props: &FaqAccordionProps) -> Html {
    let state = use_state(AccordionState::default);
    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                state.set(AccordionState::default());
                || ()
            },
            props.items.clone(),
        );
    }

    html! {
        <div class="faq-accordion">
            {for props.items.iter().enumerate().map(|(index, item)| {
                let on_toggle = {
                    let state = state.clone();
                    Callback::from(move |()| state.set(state.toggled(index)))
                };
                html! {
                    <FaqEntry
                        key={item.id.clone()}
                        item={item.clone()}
                        language={props.language.clone()}
                        is_open={state.is_open(index)}
                        {on_toggle}
                    />
                }
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FaqEntryProps {
    item: FaqItem,
    language: AttrValue,
    is_open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqEntry)]
fn faq_entry(props: &FaqEntryProps) -> Html {
    let panel = use_node_ref();
    let height = use_state(PanelHeight::default);
    {
        let panel = panel.clone();
        let height = height.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(element) = panel.cast::<web_sys::Element>() {
                    height.set(PanelHeight::measured(element.scroll_height()));
                }
                || ()
            },
            (props.item.clone(), props.language.clone()),
        );
    }
    let question = props.item.question.get(&props.language).to_string();
    let answer = props.item.answer.get(&props.language).to_string();
    let panel_id = format!("faq-panel-{}", props.item.id);
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };

    html! {
        <div class={classes!("faq-entry", props.is_open.then_some("open"))}>
            <h3>
                <button
                    type="button"
                    class="faq-question"
                    aria-expanded={props.is_open.to_string()}
                    aria-controls={panel_id.clone()}
                    {onclick}
                >
                    <span>{question}</span>
                    <span class="chevron" aria-hidden="true"></span>
                </button>
            </h3>
            <div
                id={panel_id}
                ref={panel}
                class="faq-answer"
                role="region"
                style={height.style(props.is_open)}
            >
                if props.item.is_html {
                    <RawHtml html={AttrValue::from(answer)} />
                } else {
                    <p>{answer}</p>
                }
            </div>
        </div>
    }
}
