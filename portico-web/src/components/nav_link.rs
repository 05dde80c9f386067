use yew::{AttrValue, Callback, Children, Html, MouseEvent, Properties, classes, function_component, html};
use yew_router::prelude::{Routable, use_navigator};

#[derive(Properties, PartialEq)]
pub struct NavLinkProps<R: Routable + PartialEq + 'static> {
    pub to: R,
    /// `data-testid` of the anchor.
    pub test_id: AttrValue,
    #[prop_or_default]
    pub active: bool,
    #[prop_or_default]
    pub children: Children,
}

/// Router link that also carries a test id, which `Link` cannot.
#[function_component(NavLink)]
pub fn nav_link<R: Routable + PartialEq + 'static>(props: &NavLinkProps<R>) -> Html {
    let navigator = use_navigator();
    let onclick = {
        let to = props.to.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            if let Some(navigator) = &navigator {
                navigator.push(&to);
            }
        })
    };

    html! {
        <a
            href={props.to.to_path()}
            class={classes!("btn", "btn-ghost", "btn-sm", props.active.then_some("btn-active"))}
            data-testid={props.test_id.clone()}
            {onclick}
        >
            {props.children.clone()}
        </a>
    }
}
