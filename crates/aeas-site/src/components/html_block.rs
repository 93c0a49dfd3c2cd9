//! Trusted HTML from the CMS (article bodies, FAQ answers).
//!
//! # Design
//! - Markup is injected into a host element after render; yew never diffs
//!   the injected subtree.
//! - Content is authored by school staff in the backend and rendered as-is.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct RawHtmlProps {
    pub html: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(RawHtml)]
pub(crate) fn raw_html(props: &RawHtmlProps) -> Html {
    let host = use_node_ref();
    {
        let host = host.clone();
        use_effect_with_deps(
            move |html: &AttrValue| {
                if let Some(element) = host.cast::<web_sys::Element>() {
                    element.set_inner_html(html);
                }
                || ()
            },
            props.html.clone(),
        );
    }

    html! {
        <div ref={host} class={classes!("rich-text", props.class.clone())}></div>
    }
}
