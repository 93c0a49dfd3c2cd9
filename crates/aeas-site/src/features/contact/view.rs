//! Contact form.
//!
//! # Design
//! - Validation runs locally before sending; the first problem is reported
//!   as a toast and the draft is kept.
//! - A successful send clears the draft.

use gloo::console;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::app::api::use_api;
use crate::app::context::{use_bundle, use_entity, use_language};
use crate::components::toast::push_toast;
use crate::core::forms::{ContactDraft, contact_error_key};
use crate::models::ToastKind;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    fn apply(self, draft: &ContactDraft, value: String) -> ContactDraft {
        let mut next = draft.clone();
        match self {
            Self::Name => next.name = value,
            Self::Email => next.email = value,
            Self::Subject => next.subject = value,
            Self::Message => next.message = value,
        }
        next
    }
}

#[function_component(ContactPage)]
pub(crate) fn contact_page() -> Html {
    let bundle = use_bundle();
    let language = use_language().language;
    let entity = use_entity();
    let client = use_api();
    let draft = use_state(ContactDraft::default);
    let busy = use_state(|| false);

    let on_field = |field: Field| {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            let value = event
                .target_dyn_into::<web_sys::HtmlInputElement>()
                .map(|input| input.value())
                .or_else(|| {
                    event
                        .target_dyn_into::<web_sys::HtmlTextAreaElement>()
                        .map(|area| area.value())
                });
            if let Some(value) = value {
                draft.set(field.apply(&draft, value));
            }
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let busy = busy.clone();
        let bundle = bundle.clone();
        let entidade = entity.value();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *busy {
                return;
            }
            let message = match draft.to_message(language.code(), entidade) {
                Ok(message) => message,
                Err(err) => {
                    push_toast(ToastKind::Error, bundle.text(contact_error_key(&err), ""));
                    return;
                }
            };
            busy.set(true);
            let client = client.clone();
            let draft = draft.clone();
            let busy = busy.clone();
            let bundle = bundle.clone();
            spawn_local(async move {
                match client.send_contact(&message).await {
                    Ok(_) => {
                        push_toast(ToastKind::Success, bundle.text("contact.success", ""));
                        draft.set(ContactDraft::default());
                    }
                    Err(err) => {
                        console::error!(format!("contact form failed: {err}"));
                        push_toast(ToastKind::Error, bundle.text("contact.failure", ""));
                    }
                }
                busy.set(false);
            });
        })
    };

    html! {
        <section class="page contact-page">
            <header class="page-header">
                <h1>{bundle.text("contact.title", "Contactos")}</h1>
                <p class="lead">{bundle.text("contact.subtitle", "")}</p>
            </header>
            <div class="contact-grid">
                <aside class="contact-details">
                    <h2>{bundle.text("contact.details_title", "")}</h2>
                    <p>{bundle.text("footer.address", "")}</p>
                    <p>{bundle.text("footer.phone", "")}</p>
                    <p>{bundle.text("footer.email", "")}</p>
                </aside>
                <form class="contact-form" {onsubmit} novalidate=true>
                    <label>
                        <span>{bundle.text("contact.name", "Nome")}</span>
                        <input type="text" name="name" autocomplete="name" value={draft.name.clone()} oninput={on_field(Field::Name)} />
                    </label>
                    <label>
                        <span>{bundle.text("contact.email", "Email")}</span>
                        <input type="email" name="email" autocomplete="email" value={draft.email.clone()} oninput={on_field(Field::Email)} />
                    </label>
                    <label>
                        <span>{bundle.text("contact.subject", "Assunto")}</span>
                        <input type="text" name="subject" value={draft.subject.clone()} oninput={on_field(Field::Subject)} />
                    </label>
                    <label>
                        <span>{bundle.text("contact.message", "Mensagem")}</span>
                        <textarea name="message" rows="6" value={draft.message.clone()} oninput={on_field(Field::Message)} />
                    </label>
                    <button type="submit" class="btn primary" disabled={*busy}>
                        {if *busy {
                            bundle.text("contact.sending", "A enviar…")
                        } else {
                            bundle.text("contact.submit", "Enviar")
                        }}
                    </button>
                </form>
            </div>
        </section>
    }
}

