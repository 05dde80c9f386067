use crate::components::spinner::Spinner;
use yew::{AttrValue, Callback, Html, MouseEvent, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct SubmitButtonProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
    /// Shows the spinner while the request is in flight.
    #[prop_or_default]
    pub pending: bool,
    pub on_click: Callback<()>,
}

#[function_component(SubmitButton)]
pub fn submit_button(props: &SubmitButtonProps) -> Html {
    let onclick = {
        let on_click = props.on_click.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            on_click.emit(());
        })
    };

    html! {
        <button
            class="btn btn-primary"
            type="submit"
            disabled={props.disabled || props.pending}
            {onclick}
        >
            if props.pending {
                <Spinner />
            }
            {props.label.clone()}
        </button>
    }
}
