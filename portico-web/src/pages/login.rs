use crate::api::PorticoClient;
use crate::components::{FormInput, SubmitButton, failure_alert};
use crate::forms::login::{LoginField, LoginForm};
use crate::forms::{Form, FormAction, use_submission};
use crate::models::app_state::AppState;
use crate::routes::Route;
use i18nrs::yew::use_translation;
use shared::models::Session;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let (i18n, _) = use_translation();
    let (_, dispatch) = use_store::<AppState>();
    let navigator = use_navigator();
    let form = use_reducer(Form::<LoginForm>::default);

    use_submission(form.clone(), |model: LoginForm| async move {
        PorticoClient::shared()
            .login(&model.credentials())
            .await
            .map(Session::from)
    });

    // A successful login replaces this page with the home page
    {
        let outcome = form.outcome().cloned();
        use_effect_with(outcome, move |outcome| {
            if let Some(session) = outcome {
                log::info!("logged in as {}", session.username);
                dispatch.reduce_mut(|state| state.log_in(session.clone()));
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::Home);
                }
            }
            || ()
        });
    }

    let on_input = |field: LoginField| {
        let form = form.clone();
        Callback::from(move |value: String| form.dispatch(FormAction::Input(field, value)))
    };

    let on_submit = {
        let form = form.clone();
        Callback::from(move |()| form.dispatch(FormAction::Submit))
    };

    html! {
        <div class="flex justify-center" data-testid="login-page">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" data-testid="form-login" onsubmit={|event: SubmitEvent| event.prevent_default()}>
                    <h1 class="card-title text-2xl">{i18n.t("login")}</h1>
                    <FormInput
                        id="email"
                        label={i18n.t("email")}
                        input_type="email"
                        value={form.value(LoginField::Email).to_string()}
                        help={form.error_for(LoginField::Email).map(|message| AttrValue::from(message.to_string()))}
                        on_input={on_input(LoginField::Email)}
                    />
                    <FormInput
                        id="password"
                        label={i18n.t("password")}
                        input_type="password"
                        value={form.value(LoginField::Password).to_string()}
                        help={form.error_for(LoginField::Password).map(|message| AttrValue::from(message.to_string()))}
                        on_input={on_input(LoginField::Password)}
                    />
                    {failure_alert(form.failure(), &i18n.t("genericError"))}
                    <div class="form-control mt-4">
                        <SubmitButton
                            label={i18n.t("login")}
                            disabled={!form.submit_enabled()}
                            pending={form.is_pending()}
                            on_click={on_submit}
                        />
                    </div>
                    <Link<Route> to={Route::PasswordResetRequest} classes="link link-hover text-sm mt-2">
                        {i18n.t("passwordReset.forgot")}
                    </Link<Route>>
                </form>
            </div>
        </div>
    }
}
