use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::context::use_bundle;
use crate::app::routes::Route;

#[function_component(NotFoundPage)]
pub(crate) fn not_found_page() -> Html {
    let bundle = use_bundle();
    html! {
        <section class="page not-found">
            <h1>{bundle.text("not_found.title", "Página não encontrada")}</h1>
            <p>{bundle.text("not_found.body", "")}</p>
            <Link<Route> to={Route::Home} classes={classes!("btn", "primary")}>
                {bundle.text("not_found.back_home", "Voltar ao início")}
            </Link<Route>>
        </section>
    }
}
