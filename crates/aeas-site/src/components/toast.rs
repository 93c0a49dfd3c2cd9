//! Toast notifications backed by the site store.
//!
//! # Design
//! - Any component can raise a toast through [`push_toast`]; the host is the
//!   only renderer.
//! - Each visible toast dismisses itself after a fixed delay.

use gloo::timers::callback::Timeout;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

use crate::app::context::use_bundle;
use crate::core::store::SiteStore;
use crate::models::{Toast, ToastKind};

const TOAST_TIMEOUT_MS: u32 = 5000;

/// Queue a toast from anywhere in the tree.
pub(crate) fn push_toast(kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    Dispatch::<SiteStore>::new().reduce_mut(move |store| {
        store.push_toast(kind, message);
    });
}

fn dismiss_toast(id: u64) {
    Dispatch::<SiteStore>::new().reduce_mut(move |store| store.dismiss_toast(id));
}

#[function_component(ToastHost)]
pub(crate) fn toast_host() -> Html {
    let bundle = use_bundle();
    let toasts = use_selector(|store: &SiteStore| store.toasts.clone());
    {
        use_effect_with_deps(
            move |list: &Vec<Toast>| {
                let handles: Vec<Timeout> = list
                    .iter()
                    .map(|toast| {
                        let id = toast.id;
                        Timeout::new(TOAST_TIMEOUT_MS, move || dismiss_toast(id))
                    })
                    .collect();
                move || drop(handles)
            },
            (*toasts).clone(),
        );
    }
    let dismiss_label = bundle.text("toast.dismiss", "Fechar");

    html! {
        <div class="toast-host" aria-live="polite" aria-atomic="true">
            {for toasts.iter().map(|toast| render_toast(toast, &dismiss_label))}
        </div>
    }
}

fn render_toast(toast: &Toast, dismiss_label: &str) -> Html {
    let id = toast.id;
    let on_close = Callback::from(move |_: MouseEvent| dismiss_toast(id));

    html! {
        <div class={classes!("toast", toast.kind.class())} role="status">
            <span>{toast.message.clone()}</span>
            <button type="button" class="ghost" aria-label={dismiss_label.to_string()} onclick={on_close}>{"✕"}</button>
        </div>
    }
}
