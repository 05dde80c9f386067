use yew::{Html, Properties, classes, function_component, html};

#[derive(Properties, PartialEq, Eq)]
pub struct SpinnerProps {
    /// Large spinner for page loads, small one inside buttons.
    #[prop_or_default]
    pub large: bool,
}

#[function_component(Spinner)]
pub fn spinner(props: &SpinnerProps) -> Html {
    let size = if props.large {
        "loading-lg"
    } else {
        "loading-sm"
    };
    html! {
        <span role="status" class={classes!("loading", "loading-spinner", size)}></span>
    }
}
