use i18nrs::yew::use_translation;
use yew::use_state_eq;
use yew::{Callback, function_component, html, use_effect_with};

use crate::components::language_selector_button::LanguageSelectorButton;
use crate::language;

#[function_component(LanguageSelector)]
pub fn language_selector() -> yew::Html {
    let (i18n, set_language) = use_translation();
    let language_state = use_state_eq(|| i18n.get_current_language().to_string());

    let language_state_for_effect = language_state.clone();

    // Keep local state in step with the provider
    use_effect_with(i18n.clone(), move |i18n| {
        language_state_for_effect.set(i18n.get_current_language().to_string());
        || ()
    });

    let on_click = {
        let language_state = language_state.clone();
        Callback::from(move |code: String| {
            if !language::set_active_locale(&code) {
                return;
            }
            language::persist_locale(&code);
            log::info!("language switched to {code}");
            language_state.set(code.clone());
            set_language.emit(code);
        })
    };

    let active = (*language_state).clone();

    html! {
        <div class="join" aria-label={i18n.t("language.selector")}>
            {
                for language::sorted_languages().into_iter().map(|info| {
                    html! {
                        <LanguageSelectorButton
                            is_active={info.code == active}
                            info={info}
                            on_click={on_click.clone()}
                        />
                    }
                })
            }
        </div>
    }
}
