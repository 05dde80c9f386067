use crate::forms::Failure;
use yew::{Children, Html, Properties, classes, function_component, html};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertKind {
    #[default]
    Info,
    Success,
    Error,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            Self::Info => "alert-info",
            Self::Success => "alert-success",
            Self::Error => "alert-error",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AlertProps {
    #[prop_or_default]
    pub kind: AlertKind,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Alert)]
pub fn alert(props: &AlertProps) -> Html {
    html! {
        <div role="alert" class={classes!("alert", props.kind.class())}>
            <span>{props.children.clone()}</span>
        </div>
    }
}

/// Alert for a failure without field errors, or nothing.
pub fn failure_alert(failure: Option<&Failure>, generic: &str) -> Html {
    match failure {
        Some(Failure::Message(message)) => html! {
            <Alert kind={AlertKind::Error}>{message.clone()}</Alert>
        },
        Some(Failure::Generic) => html! {
            <Alert kind={AlertKind::Error}>{generic.to_string()}</Alert>
        },
        None => html! {},
    }
}
