use crate::pages::*;
use serde::Deserialize;
use yew::prelude::*;
use yew_router::prelude::*;

/// The application routes
#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/signup")]
    SignUp,
    #[at("/login")]
    Login,
    #[at("/activation/:token")]
    Activation { token: String },
    #[at("/password-reset/request")]
    PasswordResetRequest,
    #[at("/password-reset/set")]
    PasswordResetSet,
    #[at("/user/:id")]
    User { id: u64 },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// `data-testid` carried by the root element of the page this route shows.
    pub fn page_id(&self) -> &'static str {
        match self {
            Self::Home => "home-page",
            Self::SignUp => "signup-page",
            Self::Login => "login-page",
            Self::Activation { .. } => "activation-page",
            Self::PasswordResetRequest => "password-reset-request-page",
            Self::PasswordResetSet => "password-reset-set-page",
            Self::User { .. } => "user-page",
            Self::NotFound => "not-found-page",
        }
    }
}

/// Query string of `/password-reset/set?tk=<token>` as mailed by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResetQuery {
    #[serde(default)]
    pub tk: Option<String>,
}

/// Switch function for the routes.
pub fn switch(route: Route) -> Html {
    log::debug!("switching to route {route:?}");
    match route {
        Route::Home => html! { <HomePage /> },
        Route::SignUp => html! { <SignUpPage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Activation { token } => html! { <ActivationPage {token} /> },
        Route::PasswordResetRequest => html! { <PasswordResetRequestPage /> },
        Route::PasswordResetSet => html! { <PasswordResetSetPage /> },
        Route::User { id } => html! { <UserPage {id} /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
