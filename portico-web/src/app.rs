use crate::containers::layout::Layout;
use crate::routes::{Route, switch};
use yew::{Html, function_component, html};
use yew_router::prelude::{BrowserRouter, Switch};

/// Routed application shell, below the i18n and store providers.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Layout>
                <Switch<Route> render={switch} />
            </Layout>
        </BrowserRouter>
    }
}
