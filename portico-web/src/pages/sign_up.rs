use crate::api::PorticoClient;
use crate::components::{Alert, AlertKind, FormInput, SubmitButton, failure_alert};
use crate::forms::sign_up::{SignUpField, SignUpForm};
use crate::forms::validation::shows_mismatch;
use crate::forms::{Form, FormAction, use_submission};
use i18nrs::yew::use_translation;
use yew::prelude::*;

/// Registration page.
#[function_component(SignUpPage)]
pub fn sign_up_page() -> Html {
    let (i18n, _) = use_translation();
    let form = use_reducer(Form::<SignUpForm>::default);

    use_submission(form.clone(), |model: SignUpForm| async move {
        PorticoClient::shared()
            .sign_up(&model.request())
            .await
            .map(|response| response.message)
    });

    let on_input = |field: SignUpField| {
        let form = form.clone();
        Callback::from(move |value: String| form.dispatch(FormAction::Input(field, value)))
    };

    let on_submit = {
        let form = form.clone();
        Callback::from(move |()| form.dispatch(FormAction::Submit))
    };

    let input = |field: SignUpField, label: &str, input_type: &'static str, help: Option<String>| {
        html! {
            <FormInput
                id={field.as_ref().to_string()}
                label={label.to_string()}
                input_type={input_type}
                value={form.value(field).to_string()}
                help={help.map(AttrValue::from)}
                on_input={on_input(field)}
            />
        }
    };

    let field_error = |field: SignUpField| form.error_for(field).map(str::to_string);
    let repeat_help = if shows_mismatch(&form.model.password, &form.model.password_repeat) {
        Some(i18n.t("passwordMismatch"))
    } else {
        field_error(SignUpField::PasswordRepeat)
    };

    html! {
        <div class="flex justify-center" data-testid="signup-page">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                if let Some(message) = form.outcome() {
                    <div class="card-body">
                        <Alert kind={AlertKind::Success}>{message.clone()}</Alert>
                    </div>
                } else {
                    <form class="card-body" data-testid="form-sign-up" onsubmit={|event: SubmitEvent| event.prevent_default()}>
                        <h1 class="card-title text-2xl">{i18n.t("signUp")}</h1>
                        {input(SignUpField::Username, &i18n.t("username"), "text", field_error(SignUpField::Username))}
                        {input(SignUpField::Email, &i18n.t("email"), "email", field_error(SignUpField::Email))}
                        {input(SignUpField::Password, &i18n.t("password"), "password", field_error(SignUpField::Password))}
                        {input(SignUpField::PasswordRepeat, &i18n.t("passwordRepeat"), "password", repeat_help)}
                        {failure_alert(form.failure(), &i18n.t("genericError"))}
                        <div class="form-control mt-4">
                            <SubmitButton
                                label={i18n.t("signUp")}
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
