//! Footer newsletter sign-up.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::app::api::use_api;
use crate::app::context::{use_bundle, use_language};
use crate::core::forms::{NewsletterOutcome, prepare_subscription};

#[function_component(NewsletterForm)]
pub(crate) fn newsletter_form() -> Html {
    let bundle = use_bundle();
    let language = use_language().language;
    let client = use_api();
    let email = use_state(String::new);
    let outcome = use_state(|| None::<NewsletterOutcome>);
    let busy = use_state(|| false);

    let oninput = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let onsubmit = {
        let email = email.clone();
        let outcome = outcome.clone();
        let busy = busy.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *busy {
                return;
            }
            let subscription = match prepare_subscription(&email, language.code()) {
                Ok(subscription) => subscription,
                Err(rejected) => {
                    outcome.set(Some(rejected));
                    return;
                }
            };
            busy.set(true);
            outcome.set(None);
            let client = client.clone();
            let email = email.clone();
            let outcome = outcome.clone();
            let busy = busy.clone();
            spawn_local(async move {
                let result = client.subscribe_newsletter(&subscription).await;
                let next = NewsletterOutcome::from_result(&result);
                if next.clears_input() {
                    email.set(String::new());
                }
                outcome.set(Some(next));
                busy.set(false);
            });
        })
    };

    let feedback = (*outcome).map(|outcome| {
        let class = if outcome.is_success() { "success" } else { "error" };
        html! {
            <p class={classes!("form-feedback", class)} role="status">
                {bundle.text(outcome.message_key(), "")}
            </p>
        }
    });

    html! {
        <form class="newsletter-form" {onsubmit} novalidate=true>
            <h3>{bundle.text("newsletter.title", "Newsletter")}</h3>
            <p>{bundle.text("newsletter.description", "")}</p>
            <div class="field-row">
                <input
                    type="email"
                    name="email"
                    autocomplete="email"
                    aria-label={bundle.text("newsletter.email_label", "Email")}
                    placeholder={bundle.text("newsletter.placeholder", "o-seu@email.pt")}
                    value={(*email).clone()}
                    disabled={*busy}
                    {oninput}
                />
                <button type="submit" class="btn primary" disabled={*busy}>
                    {if *busy {
                        bundle.text("newsletter.submitting", "A subscrever…")
                    } else {
                        bundle.text("newsletter.submit", "Subscrever")
                    }}
                </button>
            </div>
            {feedback.unwrap_or_default()}
        </form>
    }
}
