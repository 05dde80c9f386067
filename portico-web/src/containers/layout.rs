use crate::containers::header::Header;
use yew::{Children, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <>
            <Header />
            <main class="container mx-auto flex-grow p-4">
                {props.children.clone()}
            </main>
        </>
    }
}
