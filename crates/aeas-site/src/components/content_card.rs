//! Card used by listings and the home page.

use aeas_models::ContentItem;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::context::{use_bundle, use_language};
use crate::app::routes::Route;
use crate::core::format::{format_date, format_event_range, truncate_words};
use crate::features::content::state::ContentSection;

const EXCERPT_CHARS: usize = 160;

#[derive(Properties, PartialEq)]
pub(crate) struct ContentCardProps {
    pub item: ContentItem,
    pub section: ContentSection,
}

#[function_component(ContentCard)]
pub(crate) fn content_card(props: &ContentCardProps) -> Html {
    let bundle = use_bundle();
    let language = use_language().language;
    let item = &props.item;
    let route = Route::detail(props.section, &item.slug);

    let when = match (props.section, item.starts_at) {
        (ContentSection::Events, Some(starts_at)) => {
            Some(format_event_range(starts_at, item.ends_at, language))
        }
        _ => item.published_at.map(|published| format_date(published, language)),
    };
    let categories = item.category_names();

    html! {
        <article class={classes!("content-card", props.section.key())}>
            if let Some(image) = item.featured_image.as_ref() {
                <Link<Route> to={route.clone()} classes={classes!("card-media")}>
                    <img
                        src={image.url.clone()}
                        alt={image.alt.clone().unwrap_or_else(|| item.title.clone())}
                        loading="lazy"
                    />
                </Link<Route>>
            }
            <div class="card-body">
                if !categories.is_empty() {
                    <ul class="card-categories">
                        {for categories.iter().map(|name| html! { <li>{*name}</li> })}
                    </ul>
                }
                <h3 class="card-title">
                    <Link<Route> to={route.clone()}>{item.title.clone()}</Link<Route>>
                </h3>
                if let Some(when) = when {
                    <p class="card-date">{when}</p>
                }
                if let Some(location) = item.location.as_ref() {
                    <p class="card-location">{location.clone()}</p>
                }
                if let Some(excerpt) = item.excerpt.as_ref() {
                    <p class="card-excerpt">{truncate_words(excerpt, EXCERPT_CHARS)}</p>
                }
                <Link<Route> to={route} classes={classes!("card-more")}>
                    {bundle.text("common.read_more", "Ler mais")}
                </Link<Route>>
            </div>
        </article>
    }
}
