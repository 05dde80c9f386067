use crate::{
    api::PorticoClient,
    components::{language_selector::LanguageSelector, nav_link::NavLink},
    models::app_state::AppState,
    routes::Route,
};
use i18nrs::yew::use_translation;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::{use_navigator, use_route};
use yewdux::Dispatch;
use yewdux::prelude::use_store;

/// Log out on the server, then forget the session whatever the server said.
pub(crate) async fn end_session(client: &PorticoClient, dispatch: &Dispatch<AppState>) {
    if let Err(err) = client.logout().await {
        log::warn!("logout request failed, clearing session anyway: {err}");
    }
    dispatch.reduce_mut(AppState::log_out);
}

/// Top navigation bar. The links depend on whether a session is held.
#[function_component(Header)]
pub fn header() -> Html {
    let (i18n, ..) = use_translation();
    let (state, dispatch) = use_store::<AppState>();
    let navigator = use_navigator();
    let current = use_route::<Route>();
    let is_current = |route: &Route| current.as_ref() == Some(route);

    let on_logout = {
        let dispatch = dispatch.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                end_session(&PorticoClient::shared(), &dispatch).await;
                if let Some(navigator) = navigator {
                    navigator.push(&Route::Home);
                }
            });
        })
    };

    let session_links = match &state.session {
        Some(session) => {
            let profile = Route::User { id: session.id };
            html! {
                <>
                    <NavLink<Route>
                        to={profile.clone()}
                        test_id="link-my-profile"
                        active={is_current(&profile)}
                    >
                        {i18n.t("myProfile")}
                    </NavLink<Route>>
                    <a
                        href="/"
                        class="btn btn-ghost btn-sm"
                        data-testid="link-logout"
                        onclick={on_logout}
                    >
                        {i18n.t("logout")}
                    </a>
                </>
            }
        }
        None => html! {
            <>
                <NavLink<Route>
                    to={Route::SignUp}
                    test_id="link-signup-page"
                    active={is_current(&Route::SignUp)}
                >
                    {i18n.t("signUp")}
                </NavLink<Route>>
                <NavLink<Route>
                    to={Route::Login}
                    test_id="link-login-page"
                    active={is_current(&Route::Login)}
                >
                    {i18n.t("login")}
                </NavLink<Route>>
            </>
        },
    };

    html! {
        <nav class="navbar bg-base-200 shadow-sm px-4">
            <div class="flex-1">
                <NavLink<Route> to={Route::Home} test_id="link-home-page">
                    <span class="text-lg font-bold">{i18n.t("app.title")}</span>
                </NavLink<Route>>
            </div>
            <div class="flex-none flex items-center gap-2">
                {session_links}
                <LanguageSelector />
            </div>
        </nav>
    }
}
