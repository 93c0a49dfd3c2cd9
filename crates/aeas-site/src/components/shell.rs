//! Page chrome: header with navigation and preference controls, footer with
//! the backend menu and the newsletter form.
//!
//! # Design
//! - Navigation labels are resolved once per render from the active bundle.
//! - The mobile menu flag lives in the site store and closes on navigation.
//! - The footer menu is optional: a failed fetch leaves it empty.

use aeas_models::MenuItem;
use gloo::console;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

use crate::app::api::use_api;
use crate::app::context::{use_bundle, use_language};
use crate::app::routes::Route;
use crate::components::entity_menu::EntityMenu;
use crate::components::locale_menu::LocaleMenu;
use crate::components::newsletter::NewsletterForm;
use crate::components::theme_toggle::ThemeToggle;
use crate::core::store::SiteStore;
use crate::i18n::TranslationBundle;
use crate::models::NavLabels;

fn nav_labels(bundle: &TranslationBundle) -> NavLabels {
    NavLabels {
        home: bundle.text("nav.home", "Início"),
        about: bundle.text("nav.about", "Sobre"),
        events: bundle.text("nav.events", "Eventos"),
        projects: bundle.text("nav.projects", "Projetos"),
        news: bundle.text("nav.news", "Notícias"),
        faq: bundle.text("nav.faq", "Perguntas frequentes"),
        secretary: bundle.text("nav.secretary", "Secretaria"),
        contact: bundle.text("nav.contact", "Contactos"),
    }
}

fn is_active(target: &Route, current: Option<&Route>) -> bool {
    match (target, current) {
        (_, None) => false,
        (Route::Home, Some(current)) => *current == Route::Home,
        (target, Some(current)) => match (target.section(), current.section()) {
            (Some(a), Some(b)) => a == b,
            _ => target == current,
        },
    }
}

fn nav_item(target: Route, label: &str, current: Option<&Route>) -> Html {
    let active = is_active(&target, current);
    html! {
        <li>
            <Link<Route> to={target} classes={classes!("nav-link", active.then_some("active"))}>
                {label.to_string()}
            </Link<Route>>
        </li>
    }
}

fn set_menu_open(open: bool) {
    Dispatch::<SiteStore>::new().reduce_mut(move |store| store.menu_open = open);
}

#[function_component(Header)]
pub(crate) fn header() -> Html {
    let bundle = use_bundle();
    let language = use_language();
    let route = use_route::<Route>();
    let menu_open = use_selector(|store: &SiteStore| store.menu_open);
    {
        use_effect_with_deps(
            move |_| {
                set_menu_open(false);
                || ()
            },
            route.clone(),
        );
    }
    let labels = nav_labels(&bundle);
    let current = route.as_ref();
    let toggle = {
        let open = *menu_open;
        Callback::from(move |_: MouseEvent| set_menu_open(!open))
    };
    let toggle_label = if *menu_open {
        bundle.text("header.close_menu", "Fechar menu")
    } else {
        bundle.text("header.open_menu", "Abrir menu")
    };

    html! {
        <header class="site-header">
            <div class="container header-bar">
                <Link<Route> to={Route::Home} classes={classes!("brand")}>
                    <span class="brand-name">{bundle.text("header.brand", "Agrupamento de Escolas António Sérgio")}</span>
                </Link<Route>>
                <button
                    type="button"
                    class="btn ghost menu-toggle"
                    aria-expanded={menu_open.to_string()}
                    aria-controls="site-nav"
                    aria-label={toggle_label}
                    onclick={toggle}
                >
                    <span aria-hidden="true">{if *menu_open { "✕" } else { "☰" }}</span>
                </button>
                <nav id="site-nav" class={classes!("site-nav", menu_open.then_some("open"))}>
                    <ul>
                        {nav_item(Route::Home, &labels.home, current)}
                        {nav_item(Route::About, &labels.about, current)}
                        {nav_item(Route::Events, &labels.events, current)}
                        {nav_item(Route::Projects, &labels.projects, current)}
                        {nav_item(Route::News, &labels.news, current)}
                        {nav_item(Route::Faq, &labels.faq, current)}
                        {nav_item(Route::Secretary, &labels.secretary, current)}
                        {nav_item(Route::Contact, &labels.contact, current)}
                    </ul>
                    <div class="header-controls">
                        <EntityMenu />
                        <LocaleMenu
                            locale={language.language}
                            label={bundle.text("header.language", "Idioma")}
                            on_select={language.set_language.clone()}
                        />
                        <ThemeToggle />
                    </div>
                </nav>
            </div>
        </header>
    }
}

fn menu_link(item: &MenuItem) -> Html {
    let Some(url) = item.url.clone() else {
        return html! { <span>{item.label.clone()}</span> };
    };
    if item.is_external() {
        return html! {
            <a href={url} target="_blank" rel="noopener noreferrer">{item.label.clone()}</a>
        };
    }
    match Route::recognize(&url) {
        Some(route) if route != Route::NotFound => html! {
            <Link<Route> to={route}>{item.label.clone()}</Link<Route>>
        },
        _ => html! { <a href={url}>{item.label.clone()}</a> },
    }
}

#[function_component(Footer)]
pub(crate) fn footer() -> Html {
    let bundle = use_bundle();
    let client = use_api();
    let menu = use_state(Vec::<MenuItem>::new);
    {
        let menu = menu.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match client.fetch_menu().await {
                        Ok(items) => menu.set(items),
                        Err(err) => console::error!(format!("menu unavailable: {err}")),
                    }
                });
                || ()
            },
            (),
        );
    }
    let labels = nav_labels(&bundle);

    html! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <section class="footer-about">
                    <h3>{bundle.text("header.brand", "Agrupamento de Escolas António Sérgio")}</h3>
                    <p>{bundle.text("footer.address", "")}</p>
                    <p>
                        <a href={format!("tel:{}", bundle.text("footer.phone", ""))}>{bundle.text("footer.phone", "")}</a>
                        {" · "}
                        <a href={format!("mailto:{}", bundle.text("footer.email", ""))}>{bundle.text("footer.email", "")}</a>
                    </p>
                </section>
                <nav class="footer-links" aria-label={bundle.text("footer.links", "Ligações")}>
                    <ul>
                        {nav_item(Route::About, &labels.about, None)}
                        {nav_item(Route::Faq, &labels.faq, None)}
                        {nav_item(Route::Secretary, &labels.secretary, None)}
                        {nav_item(Route::Contact, &labels.contact, None)}
                    </ul>
                    if !menu.is_empty() {
                        <ul class="backend-menu">
                            {for menu.iter().map(|item| html! {
                                <li key={item.id.clone()}>
                                    {menu_link(item)}
                                    if !item.children.is_empty() {
                                        <ul>
                                            {for item.children.iter().map(|child| html! {
                                                <li key={child.id.clone()}>{menu_link(child)}</li>
                                            })}
                                        </ul>
                                    }
                                </li>
                            })}
                        </ul>
                    }
                </nav>
                <NewsletterForm />
            </div>
            <p class="footer-legal container">
                {bundle.format("footer.copyright", "© {year} Agrupamento de Escolas António Sérgio", &[("year", &chrono::Utc::now().format("%Y").to_string())])}
            </p>
        </footer>
    }
}
