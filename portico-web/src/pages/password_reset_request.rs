use crate::api::PorticoClient;
use crate::components::{Alert, AlertKind, FormInput, SubmitButton, failure_alert};
use crate::forms::password_reset::{PasswordResetRequestForm, ResetRequestField};
use crate::forms::{Form, FormAction, use_submission};
use i18nrs::yew::use_translation;
use yew::prelude::*;

/// Asks the server to mail a password reset link.
#[function_component(PasswordResetRequestPage)]
pub fn password_reset_request_page() -> Html {
    let (i18n, _) = use_translation();
    let form = use_reducer(Form::<PasswordResetRequestForm>::default);

    use_submission(form.clone(), |model: PasswordResetRequestForm| async move {
        PorticoClient::shared()
            .request_password_reset(&model.request())
            .await
            .map(|response| response.message)
    });

    let on_input = {
        let form = form.clone();
        Callback::from(move |value: String| {
            form.dispatch(FormAction::Input(ResetRequestField::Email, value));
        })
    };

    let on_submit = {
        let form = form.clone();
        Callback::from(move |()| form.dispatch(FormAction::Submit))
    };

    html! {
        <div class="flex justify-center" data-testid="password-reset-request-page">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={|event: SubmitEvent| event.prevent_default()}>
                    <h1 class="card-title text-2xl">{i18n.t("passwordReset.request")}</h1>
                    <FormInput
                        id="email"
                        label={i18n.t("email")}
                        input_type="email"
                        value={form.value(ResetRequestField::Email).to_string()}
                        help={form.error_for(ResetRequestField::Email).map(|message| AttrValue::from(message.to_string()))}
                        {on_input}
                    />
                    if let Some(message) = form.outcome() {
                        <Alert kind={AlertKind::Success}>{message.clone()}</Alert>
                    }
                    {failure_alert(form.failure(), &i18n.t("genericError"))}
                    <div class="form-control mt-4">
                        <SubmitButton
                            label={i18n.t("passwordReset.requestSubmit")}
                            disabled={!form.submit_enabled()}
                            pending={form.is_pending()}
                            on_click={on_submit}
                        />
                    </div>
                </form>
            </div>
        </div>
    }
}
