use crate::api::PorticoClient;
use crate::components::{Alert, AlertKind, Spinner, failure_alert};
use crate::error::ApiError;
use crate::fetch::{FetchState, use_fetch};
use i18nrs::yew::use_translation;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ActivationPageProps {
    pub token: String,
}

/// Activates the account identified by the emailed token as soon as it opens.
#[function_component(ActivationPage)]
pub fn activation_page(props: &ActivationPageProps) -> Html {
    let (i18n, _) = use_translation();
    let activation = use_fetch(props.token.clone(), |token: &String| {
        let token = token.clone();
        async move {
            let response = PorticoClient::shared().activate(&token).await?;
            log::info!("account activated");
            Ok::<_, ApiError>(response.message)
        }
    });

    html! {
        <div class="flex flex-col items-center gap-4" data-testid="activation-page">
            <h1 class="text-2xl font-bold">{i18n.t("activation.title")}</h1>
            {
                match activation.state() {
                    FetchState::Pending => html! { <Spinner large=true /> },
                    FetchState::Loaded(message) => html! {
                        <Alert kind={AlertKind::Success}>{message.clone()}</Alert>
                    },
                    FetchState::Failed(failure) => {
                        failure_alert(Some(failure), &i18n.t("genericError"))
                    }
                }
            }
        </div>
    }
}
