//! School selector that scopes listings and the FAQ.

use yew::prelude::*;

use crate::app::context::{use_bundle, use_entity};
use crate::core::entities::{ENTIDADES, Entity};

#[function_component(EntityMenu)]
pub(crate) fn entity_menu() -> Html {
    let bundle = use_bundle();
    let entity = use_entity();
    let onchange = {
        let set_selected = entity.set_selected.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                set_selected.emit(Entity::by_value(&select.value()));
            }
        })
    };
    let current = entity.value().unwrap_or_default();
    let label = bundle.text("header.entity_label", "Escola");

    html! {
        <label class="entity-menu">
            <span class="sr-only">{label.clone()}</span>
            <select aria-label={label} disabled={!entity.is_ready} {onchange}>
                <option value="" selected={current.is_empty()}>
                    {bundle.text("header.entity_all", "Todas as escolas")}
                </option>
                {for ENTIDADES.iter().map(|candidate| html! {
                    <option value={candidate.value} selected={candidate.value == current}>
                        {candidate.name}
                    </option>
                })}
            </select>
        </label>
    }
}
