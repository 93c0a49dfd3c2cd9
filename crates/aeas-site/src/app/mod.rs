//! Browser entry point: providers, router and page chrome.
//!
//! # Design
//! - Provider order is fixed: API client, language (with its translation
//!   bundle), theme, then entity. Pages may rely on all four.
//! - Route changes scroll back to the top of the page.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::shell::{Footer, Header};
use crate::components::toast::ToastHost;
use crate::features::about::view::AboutPage;
use crate::features::contact::view::ContactPage;
use crate::features::content::state::ContentSection;
use crate::features::content::view::{ContentDetailPage, ContentListPage};
use crate::features::faq::view::FaqPage;
use crate::features::home::view::HomePage;
use crate::features::not_found::view::NotFoundPage;
use crate::features::secretary::view::SecretaryPage;
use crate::services::api_base_url;
use api::ApiCtx;
use context::{EntityProvider, LanguageProvider, ThemeProvider};
use preferences::scroll_to_top;
use routes::Route;

pub(crate) mod api;
pub(crate) mod context;
mod preferences;
pub(crate) mod routes;

#[function_component(SiteApp)]
pub(crate) fn site_app() -> Html {
    let api_ctx = use_memo(|_| ApiCtx::new(api_base_url()), ());

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <LanguageProvider>
                <ThemeProvider>
                    <EntityProvider>
                        <BrowserRouter>
                            <ScrollReset />
                            <Header />
                            <main id="content" class="site-main">
                                <Switch<Route> render={switch} />
                            </main>
                            <Footer />
                            <ToastHost />
                        </BrowserRouter>
                    </EntityProvider>
                </ThemeProvider>
            </LanguageProvider>
        </ContextProvider<ApiCtx>>
    }
}

#[function_component(ScrollReset)]
fn scroll_reset() -> Html {
    let location = use_location().map(|location| location.path().to_string());
    use_effect_with_deps(
        |_| {
            scroll_to_top();
            || ()
        },
        location,
    );
    html! {}
}

fn detail(section: ContentSection, slug: String) -> Html {
    html! { <ContentDetailPage {section} slug={AttrValue::from(slug)} /> }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::About => html! { <AboutPage /> },
        Route::Events => html! { <ContentListPage section={ContentSection::Events} /> },
        Route::Projects => html! { <ContentListPage section={ContentSection::Projects} /> },
        Route::News => html! { <ContentListPage section={ContentSection::News} /> },
        Route::Event { slug } => detail(ContentSection::Events, slug),
        Route::Project { slug } => detail(ContentSection::Projects, slug),
        Route::Article { slug } => detail(ContentSection::News, slug),
        Route::Faq => html! { <FaqPage /> },
        Route::Secretary => html! { <SecretaryPage /> },
        Route::Contact => html! { <ContactPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

/// Mount the site on `#root`, or on `<body>` when that element is missing.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<SiteApp>::with_root(root).render();
    } else {
        yew::Renderer::<SiteApp>::new().render();
    }
}
