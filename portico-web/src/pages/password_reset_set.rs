use crate::api::PorticoClient;
use crate::components::{Alert, AlertKind, FormInput, SubmitButton, failure_alert};
use crate::forms::password_reset::{PasswordSetField, PasswordSetForm};
use crate::forms::validation::shows_mismatch;
use crate::forms::{Form, FormAction, use_submission};
use crate::routes::ResetQuery;
use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_router::prelude::*;

/// Sets a new password for the token in the `tk` query parameter.
#[function_component(PasswordResetSetPage)]
pub fn password_reset_set_page() -> Html {
    let (i18n, _) = use_translation();
    let token = use_location()
        .and_then(|location| location.query::<ResetQuery>().ok())
        .and_then(|query| query.tk)
        .unwrap_or_default();
    let form = use_reducer(Form::<PasswordSetForm>::default);

    {
        let token = token.clone();
        use_submission(form.clone(), move |model: PasswordSetForm| async move {
            PorticoClient::shared()
                .set_password(&token, &model.update())
                .await
                .map(|response| response.message)
        });
    }

    let on_input = |field: PasswordSetField| {
        let form = form.clone();
        Callback::from(move |value: String| form.dispatch(FormAction::Input(field, value)))
    };

    let on_submit = {
        let form = form.clone();
        Callback::from(move |()| form.dispatch(FormAction::Submit))
    };

    let password_help = form
        .error_for(PasswordSetField::Password)
        .map(|message| AttrValue::from(message.to_string()));
    let repeat_help = if shows_mismatch(&form.model.password, &form.model.password_repeat) {
        Some(AttrValue::from(i18n.t("passwordMismatch")))
    } else {
        form.error_for(PasswordSetField::PasswordRepeat)
            .map(|message| AttrValue::from(message.to_string()))
    };

    html! {
        <div class="flex justify-center" data-testid="password-reset-set-page">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                if let Some(message) = form.outcome() {
                    <div class="card-body">
                        <Alert kind={AlertKind::Success}>{message.clone()}</Alert>
                    </div>
                } else {
                    <form class="card-body" onsubmit={|event: SubmitEvent| event.prevent_default()}>
                        <h1 class="card-title text-2xl">{i18n.t("passwordReset.setTitle")}</h1>
                        if token.is_empty() {
                            <Alert kind={AlertKind::Info}>{i18n.t("passwordReset.missingToken")}</Alert>
                        }
                        <FormInput
                            id="password"
                            label={i18n.t("password")}
                            input_type="password"
                            value={form.value(PasswordSetField::Password).to_string()}
                            help={password_help}
                            on_input={on_input(PasswordSetField::Password)}
                        />
                        <FormInput
                            id="passwordRepeat"
                            label={i18n.t("passwordRepeat")}
                            input_type="password"
                            value={form.value(PasswordSetField::PasswordRepeat).to_string()}
                            help={repeat_help}
                            on_input={on_input(PasswordSetField::PasswordRepeat)}
                        />
                        {failure_alert(form.failure(), &i18n.t("genericError"))}
                        <div class="form-control mt-4">
                            <SubmitButton
                                label={i18n.t("passwordReset.set")}
                                disabled={!form.submit_enabled()}
                                pending={form.is_pending()}
                                on_click={on_submit}
                            />
                        </div>
                    </form>
                }
            </div>
        </div>
    }
}
