//! Pagination bar for listing pages.
//!
//! # Design
//! - Slots come from [`page_window`]; this component only renders them.
//! - The bar is omitted entirely when there is a single page.

use aeas_models::PageMeta;
use yew::prelude::*;

use crate::app::context::use_bundle;
use crate::core::pagination::{PageSlot, window_for};

#[derive(Properties, PartialEq)]
pub(crate) struct PaginationProps {
    pub meta: PageMeta,
    pub on_select: Callback<u32>,
}

#[function_component(Pagination)]
pub(crate) fn pagination(props: &PaginationProps) -> Html {
    let bundle = use_bundle();
    let Some(window) = window_for(Some(&props.meta)) else {
        return html! {};
    };
    let page_button = |page: Option<u32>, label: String, class: &'static str| {
        let on_select = props.on_select.clone();
        let disabled = page.is_none();
        let onclick = Callback::from(move |_: MouseEvent| {
            if let Some(page) = page {
                on_select.emit(page);
            }
        });
        html! {
            <button type="button" class={classes!("page-link", class)} {disabled} {onclick}>{label}</button>
        }
    };
    let summary = bundle.format(
        "pagination.page_of",
        "Página {page} de {total}",
        &[
            ("page", &window.current.to_string()),
            ("total", &window.total_pages.to_string()),
        ],
    );

    html! {
        <nav class="pagination" aria-label={bundle.text("pagination.label", "Paginação")}>
            {page_button(window.previous(), bundle.text("pagination.previous", "Anterior"), "previous")}
            <ul>
                {for window.slots.iter().map(|slot| match *slot {
                    PageSlot::Ellipsis => html! { <li class="ellipsis" aria-hidden="true">{"…"}</li> },
                    PageSlot::Page(page) => {
                        let current = page == window.current;
                        let on_select = props.on_select.clone();
                        let onclick = Callback::from(move |_: MouseEvent| on_select.emit(page));
                        html! {
                            <li>
                                <button
                                    type="button"
                                    class={classes!("page-link", current.then_some("active"))}
                                    aria-current={current.then_some("page")}
                                    {onclick}
                                >
                                    {page}
                                </button>
                            </li>
                        }
                    }
                })}
            </ul>
            {page_button(window.next(), bundle.text("pagination.next", "Seguinte"), "next")}
            <span class="page-summary">{summary}</span>
        </nav>
    }
}
