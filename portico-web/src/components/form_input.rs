use web_sys::HtmlInputElement;
use yew::{AttrValue, Callback, Html, InputEvent, Properties, TargetCast, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct FormInputProps {
    pub id: AttrValue,
    pub label: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    pub value: AttrValue,
    /// Message shown under the input; marks the input invalid.
    #[prop_or_default]
    pub help: Option<AttrValue>,
    pub on_input: Callback<String>,
}

/// Labelled input reporting every keystroke.
#[function_component(FormInput)]
pub fn form_input(props: &FormInputProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                on_input.emit(input.value());
            }
        })
    };
    let invalid = props.help.is_some();

    html! {
        <div class="form-control mb-3">
            <label class="label" for={props.id.clone()}>
                <span class="label-text">{props.label.clone()}</span>
            </label>
            <input
                id={props.id.clone()}
                class={classes!("input", "input-bordered", invalid.then_some("input-error"))}
                type={props.input_type.clone()}
                value={props.value.clone()}
                {oninput}
            />
            if let Some(help) = &props.help {
                <span class="label-text-alt text-error mt-1">{help.clone()}</span>
            }
        </div>
    }
}
