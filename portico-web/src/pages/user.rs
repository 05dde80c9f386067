use crate::api::PorticoClient;
use crate::components::{Spinner, failure_alert};
use crate::fetch::{FetchState, use_fetch};
use i18nrs::yew::use_translation;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UserPageProps {
    pub id: u64,
}

/// Profile of a single user.
#[function_component(UserPage)]
pub fn user_page(props: &UserPageProps) -> Html {
    let (i18n, _) = use_translation();
    let user = use_fetch(props.id, |id: &u64| {
        let id = *id;
        async move { PorticoClient::shared().get_user(id).await }
    });

    let content = match user.state() {
        FetchState::Loaded(user) => html! {
            <div class="card bg-base-100 shadow w-full max-w-md">
                <figure class="pt-6">
                    <img
                        class="rounded-full w-32 h-32"
                        src={user.display_image()}
                        alt={i18n.t("profile.image")}
                    />
                </figure>
                <div class="card-body items-center text-center">
                    <h1 class="card-title text-2xl">{user.username.clone()}</h1>
                    <span class="text-base-content/70">{user.email.clone()}</span>
                </div>
            </div>
        },
        FetchState::Failed(failure) => failure_alert(Some(failure), &i18n.t("genericError")),
        FetchState::Pending => html! { <Spinner large=true /> },
    };

    html! {
        <div class="flex justify-center" data-testid="user-page">
            {content}
        </div>
    }
}
