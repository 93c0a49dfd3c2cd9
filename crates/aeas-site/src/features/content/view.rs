//! Listing and detail pages for events, projects and news.
//!
//! # Design
//! - The query string is the source of truth for listing parameters; page
//!   changes push a new location and the fetch follows the route change.
//! - Results are scoped to the selected school both in the request and
//!   again on render, since untagged items are shared by every school.

use gloo::console;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::api::use_api;
use crate::app::context::{use_bundle, use_entity, use_language};
use crate::app::routes::Route;
use crate::components::comments::CommentList;
use crate::components::content_card::ContentCard;
use crate::components::empty_state::{EmptyState, EmptyTone};
use crate::components::html_block::RawHtml;
use crate::components::pagination::Pagination;
use crate::core::format::{format_date, format_event_range};
use crate::features::content::state::{
    ContentSection, DetailState, ListQuery, ListState, ListView,
};

#[derive(Properties, PartialEq)]
pub(crate) struct ContentListProps {
    pub section: ContentSection,
}

#[function_component(ContentListPage)]
pub(crate) fn content_list_page(props: &ContentListProps) -> Html {
    let bundle = use_bundle();
    let language = use_language();
    let entity = use_entity();
    let client = use_api();
    let navigator = use_navigator();
    let query = use_location()
        .and_then(|location| location.query::<ListQuery>().ok())
        .unwrap_or_default();
    let state = use_state(ListState::default);
    let section = props.section;

    {
        let state = state.clone();
        let deps = (
            section.key(),
            query.clone(),
            language.language,
            entity.selected,
            language.is_ready && entity.is_ready,
        );
        use_effect_with_deps(
            move |(_, query, language, selected, ready)| {
                if *ready {
                    state.set(ListState::Loading);
                    let filters = query.to_filters(section, language.code(), selected.as_ref());
                    spawn_local(async move {
                        match client.fetch_content(&filters).await {
                            Ok(page) => state.set(ListState::Loaded(page)),
                            Err(err) => {
                                console::error!(format!("content list failed: {err}"));
                                state.set(ListState::Failed);
                            }
                        }
                    });
                }
                || ()
            },
            deps,
        );
    }

    let on_page = {
        let query = query.clone();
        Callback::from(move |page: u32| {
            if let Some(navigator) = navigator.as_ref() {
                if let Err(err) = navigator.push_with_query(&Route::list(section), &query.with_page(page)) {
                    console::error!(format!("navigation failed: {err}"));
                }
            }
        })
    };

    let key = section.key();
    let body = match state.view(entity.selected.as_ref()) {
        ListView::Loading => html! {
            <EmptyState tone={EmptyTone::Loading} message={bundle.text("common.loading", "A carregar…")} />
        },
        ListView::Failed => html! {
            <EmptyState tone={EmptyTone::Error} message={bundle.text(&format!("{key}.error"), "")} />
        },
        ListView::Empty => html! {
            <EmptyState message={bundle.text(&format!("{key}.empty"), "")} />
        },
        ListView::FilteredOut => html! {
            <EmptyState message={bundle.text("common.empty_entity", "")} />
        },
        ListView::Items(items, meta) => html! {
            <>
                <div class="card-grid">
                    {for items.into_iter().map(|item| html! {
                        <ContentCard key={item.id.clone()} {item} {section} />
                    })}
                </div>
                <Pagination {meta} on_select={on_page} />
            </>
        },
    };

    html! {
        <section class={classes!("page", "content-list", key)}>
            <header class="page-header">
                <h1>{bundle.text(&format!("{key}.title"), "")}</h1>
                <p class="lead">{bundle.text(&format!("{key}.subtitle"), "")}</p>
            </header>
            {body}
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ContentDetailProps {
    pub section: ContentSection,
    pub slug: AttrValue,
}

#[function_component(ContentDetailPage)]
pub(crate) fn content_detail_page(props: &ContentDetailProps) -> Html {
    let bundle = use_bundle();
    let language = use_language();
    let client = use_api();
    let state = use_state(DetailState::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |(slug, language, ready)| {
                if *ready {
                    state.set(DetailState::Loading);
                    let slug = slug.to_string();
                    let language = language.code();
                    spawn_local(async move {
                        let result = client.fetch_content_by_slug(&slug, language).await;
                        if let Err(err) = &result {
                            console::error!(format!("content {slug} failed: {err}"));
                        }
                        state.set(DetailState::from_result(result));
                    });
                }
                || ()
            },
            (props.slug.clone(), language.language, language.is_ready),
        );
    }

    let key = props.section.key();
    let back = html! {
        <Link<Route> to={Route::list(props.section)} classes={classes!("back-link")}>
            {bundle.text(&format!("{key}.back"), "Voltar")}
        </Link<Route>>
    };

    let body = match &*state {
        DetailState::Loading => html! {
            <EmptyState tone={EmptyTone::Loading} message={bundle.text("common.loading", "A carregar…")} />
        },
        DetailState::NotFound => html! {
            <EmptyState message={bundle.text(&format!("{key}.not_found"), "")}>{back.clone()}</EmptyState>
        },
        DetailState::Failed => html! {
            <EmptyState tone={EmptyTone::Error} message={bundle.text(&format!("{key}.error"), "")}>{back.clone()}</EmptyState>
        },
        DetailState::Loaded(item) => {
            let when = match (props.section, item.starts_at) {
                (ContentSection::Events, Some(starts_at)) => {
                    Some(format_event_range(starts_at, item.ends_at, language.language))
                }
                _ => item.published_at.map(|published| format_date(published, language.language)),
            };
            let categories = item.category_names();
            let body = match (item.content.as_ref(), item.excerpt.as_ref()) {
                (Some(content), _) => html! { <RawHtml html={AttrValue::from(content.clone())} /> },
                (None, Some(excerpt)) => html! { <p class="lead">{excerpt.clone()}</p> },
                (None, None) => html! {},
            };
            html! {
                <article class="content-detail">
                    {back.clone()}
                    <header>
                        <h1>{item.title.clone()}</h1>
                        <p class="meta">
                            if let Some(when) = when {
                                <span class="date">{when}</span>
                            }
                            if let Some(author) = item.author_name() {
                                <span class="author">
                                    {bundle.format("common.by_author", "por {author}", &[("author", author)])}
                                </span>
                            }
                            if let Some(location) = item.location.as_ref() {
                                <span class="location">{location.clone()}</span>
                            }
                        </p>
                        if !categories.is_empty() {
                            <ul class="card-categories">
                                {for categories.iter().map(|name| html! { <li>{*name}</li> })}
                            </ul>
                        }
                    </header>
                    if let Some(image) = item.featured_image.as_ref() {
                        <figure class="featured-image">
                            <img src={image.url.clone()} alt={image.alt.clone().unwrap_or_default()} />
                        </figure>
                    }
                    {body}
                    if let Some(comments) = item.comments.as_ref() {
                        <CommentList comments={comments.clone()} />
                    }
                </article>
            }
        }
    };

    html! {
        <section class={classes!("page", "content-detail-page", key)}>
            {body}
        </section>
    }
}
