use crate::routes::Route;
use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_router::prelude::Link;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    let (i18n, _) = use_translation();

    html! {
        <div class="hero min-h-[50vh]" data-testid="not-found-page">
            <div class="hero-content text-center flex-col">
                <h1 class="text-5xl font-bold">{"404"}</h1>
                <p>{i18n.t("notFound.title")}</p>
                <Link<Route> classes="btn btn-primary" to={Route::Home}>
                    {i18n.t("notFound.back")}
                </Link<Route>>
            </div>
        </div>
    }
}
