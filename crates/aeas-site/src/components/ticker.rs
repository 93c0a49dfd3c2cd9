//! Scrolling headline strip on the home page.

use aeas_models::{ContentItem, ContentKind};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::context::use_bundle;
use crate::app::routes::Route;
use crate::features::content::state::ContentSection;

#[derive(Properties, PartialEq)]
pub(crate) struct TickerProps {
    pub items: Vec<ContentItem>,
    #[prop_or_default]
    pub loading: bool,
}

fn section_of(item: &ContentItem) -> ContentSection {
    match item.kind {
        Some(ContentKind::Event) => ContentSection::Events,
        Some(ContentKind::Project) => ContentSection::Projects,
        _ => ContentSection::News,
    }
}

#[function_component(Ticker)]
pub(crate) fn ticker(props: &TickerProps) -> Html {
    let bundle = use_bundle();
    if props.items.is_empty() {
        return if props.loading {
            html! { <div class="ticker loading" aria-busy="true"></div> }
        } else {
            html! {}
        };
    }

    html! {
        <section class="ticker" aria-label={bundle.text("home.ticker_label", "Destaques")}>
            <span class="ticker-badge">{bundle.text("home.ticker_badge", "Última hora")}</span>
            <div class="ticker-track">
                <ul>
                    {for props.items.iter().map(|item| {
                        let section = section_of(item);
                        let label = bundle.text(&format!("{}.singular", section.key()), "");
                        html! {
                            <li key={item.id.clone()}>
                                <span class="ticker-kind">{label}</span>
                                <Link<Route> to={Route::detail(section, &item.slug)}>
                                    {item.title.clone()}
                                </Link<Route>>
                            </li>
                        }
                    })}
                </ul>
            </div>
        </section>
    }
}
