use crate::routes::Route;
use shared::models::User;
use yew::{Callback, Html, MouseEvent, Properties, function_component, html};
use yew_router::hooks::use_navigator;

#[derive(Properties, PartialEq)]
pub struct UserListItemProps {
    pub user: User,
}

#[function_component(UserListItem)]
pub fn user_list_item(props: &UserListItemProps) -> Html {
    let navigator = use_navigator();
    let user = &props.user;
    let onclick = {
        let id = user.id;
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::User { id });
            }
        })
    };

    html! {
        <li class="flex items-center gap-3 p-2 cursor-pointer hover:bg-base-200 rounded-box" {onclick}>
            <img class="w-8 h-8 rounded-full" src={user.display_image()} alt="profile" />
            <span>{ &user.username }</span>
        </li>
    }
}
