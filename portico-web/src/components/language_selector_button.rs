use yew::{Callback, Html, Properties, classes, function_component, html};

use crate::language::LanguageInfo;

#[derive(Properties, PartialEq)]
pub struct LanguageSelectorButtonProps {
    pub is_active: bool,
    pub info: LanguageInfo,
    pub on_click: Callback<String>,
}

#[function_component(LanguageSelectorButton)]
pub fn language_selector_button(props: &LanguageSelectorButtonProps) -> Html {
    let info = &props.info;
    let code = info.code.to_string();
    let on_click = props.on_click.clone();
    html! {
        <button
            type="button"
            class={classes!("btn", "btn-ghost", "btn-sm", "join-item", props.is_active.then_some("btn-active"))}
            title={info.native_name}
            data-testid={format!("language-{}-selector", info.code)}
            onclick={move |event: yew::MouseEvent| {
                event.prevent_default();
                on_click.emit(code.clone());
            }}>
            <span>{info.flag}</span>
        </button>
    }
}
