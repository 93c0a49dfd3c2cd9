use yew::prelude::*;

use crate::app::context::use_bundle;

const SECTIONS: [&str; 4] = ["mission", "history", "schools", "project"];

#[function_component(AboutPage)]
pub(crate) fn about_page() -> Html {
    let bundle = use_bundle();

    html! {
        <section class="page about-page">
            <header class="page-header">
                <h1>{bundle.text("about.title", "Sobre o agrupamento")}</h1>
                <p class="lead">{bundle.text("about.subtitle", "")}</p>
            </header>
            {for SECTIONS.iter().map(|section| html! {
                <article class="about-section">
                    <h2>{bundle.text(&format!("about.{section}.title"), "")}</h2>
                    <p>{bundle.text(&format!("about.{section}.body"), "")}</p>
                </article>
            })}
        </section>
    }
}
