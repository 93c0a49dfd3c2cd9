use gloo::console;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::api::use_api;
use crate::app::context::{use_bundle, use_entity, use_language};
use crate::app::routes::Route;
use crate::components::content_card::ContentCard;
use crate::components::empty_state::{EmptyState, EmptyTone};
use crate::components::ticker::Ticker;
use crate::core::ticker::Slot;
use crate::features::content::state::ContentSection;
use crate::features::home::state::HomeFeeds;

const QUICK_LINKS: [(Route, &str); 3] = [
    (Route::Secretary, "nav.secretary"),
    (Route::Faq, "nav.faq"),
    (Route::Contact, "nav.contact"),
];

#[function_component(HomePage)]
pub(crate) fn home_page() -> Html {
    let bundle = use_bundle();
    let language = use_language();
    let entity = use_entity();
    let client = use_api();
    let feeds = use_reducer_eq(FeedsState::default);

    {
        let feeds = feeds.clone();
        use_effect_with_deps(
            move |(language, ready)| {
                if *ready {
                    feeds.dispatch(FeedAction::Reset);
                    for (section, filters) in HomeFeeds::requests(language.code()) {
                        let client = client.clone();
                        let feeds = feeds.clone();
                        spawn_local(async move {
                            let slot = match client.fetch_content(&filters).await {
                                Ok(page) => Slot::Loaded(page.data),
                                Err(err) => {
                                    console::error!(format!("{} feed failed: {err}", section.key()));
                                    Slot::Failed
                                }
                            };
                            feeds.dispatch(FeedAction::Set(section, slot));
                        });
                    }
                }
                || ()
            },
            (language.language, language.is_ready),
        );
    }

    let selected = entity.selected.as_ref();
    let ticker = feeds.0.ticker(selected);
    let news = feeds.0.featured_news(selected);
    let news_body = match &feeds.0.news {
        Slot::Loading => html! {
            <EmptyState tone={EmptyTone::Loading} message={bundle.text("common.loading", "A carregar…")} />
        },
        Slot::Failed => html! {
            <EmptyState tone={EmptyTone::Error} message={bundle.text("news.error", "")} />
        },
        Slot::Loaded(_) if news.is_empty() => html! {
            <EmptyState message={bundle.text("news.empty", "")} />
        },
        Slot::Loaded(_) => html! {
            <div class="card-grid">
                {for news.into_iter().map(|item| html! {
                    <ContentCard key={item.id.clone()} {item} section={ContentSection::News} />
                })}
            </div>
        },
    };

    html! {
        <div class="page home-page">
            <section class="hero">
                <div class="container">
                    <h1>{bundle.text("home.hero_title", "Agrupamento de Escolas António Sérgio")}</h1>
                    <p class="lead">{bundle.text("home.hero_subtitle", "")}</p>
                    <div class="hero-actions">
                        <Link<Route> to={Route::About} classes={classes!("btn", "primary")}>
                            {bundle.text("home.hero_cta", "Conheça o agrupamento")}
                        </Link<Route>>
                        <Link<Route> to={Route::Contact} classes={classes!("btn", "ghost")}>
                            {bundle.text("nav.contact", "Contactos")}
                        </Link<Route>>
                    </div>
                </div>
            </section>
            <Ticker items={ticker} loading={feeds.0.is_loading()} />
            <section class="featured-news container">
                <header class="section-header">
                    <h2>{bundle.text("home.featured_news", "Notícias em destaque")}</h2>
                    <Link<Route> to={Route::News} classes={classes!("see-all")}>
                        {bundle.text("common.see_all", "Ver todas")}
                    </Link<Route>>
                </header>
                {news_body}
            </section>
            <section class="quick-links container">
                <h2>{bundle.text("home.quick_links", "Acesso rápido")}</h2>
                <ul>
                    {for QUICK_LINKS.iter().map(|(route, key)| html! {
                        <li>
                            <Link<Route> to={route.clone()}>{bundle.text(key, "")}</Link<Route>>
                        </li>
                    })}
                </ul>
            </section>
        </div>
    }
}

enum FeedAction {
    Reset,
    Set(ContentSection, Slot<Vec<aeas_models::ContentItem>>),
}

#[derive(Default, PartialEq)]
struct FeedsState(HomeFeeds);

impl Reducible for FeedsState {
    type Action = FeedAction;

    fn reduce(self: std::rc::Rc<Self>, action: Self::Action) -> std::rc::Rc<Self> {
        let mut feeds = self.0.clone();
        match action {
            FeedAction::Reset => feeds = HomeFeeds::default(),
            FeedAction::Set(section, slot) => feeds.set(section, slot),
        }
        std::rc::Rc::new(Self(feeds))
    }
}
