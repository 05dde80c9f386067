use crate::api::PorticoClient;
use crate::components::spinner::Spinner;
use crate::components::user_list_item::UserListItem;
use crate::config::FrontendConfig;
use crate::fetch::{FetchState, use_fetch};
use i18nrs::yew::use_translation;
use yew::{Callback, Html, MouseEvent, function_component, html, use_state};

/// Paginated directory of registered users.
#[function_component(UserList)]
pub fn user_list() -> Html {
    let (i18n, ..) = use_translation();
    let page_size = FrontendConfig::new().user_page_size;
    let page_index = use_state(|| 0_u32);
    let page = use_fetch(*page_index, move |index: &u32| {
        let index = *index;
        async move { PorticoClient::shared().list_users(index, page_size).await }
    });

    let go_to = |target: u32| {
        let page_index = page_index.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            page_index.set(target);
        })
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{i18n.t("userList.title")}</h2>
                {
                    match page.state() {
                        FetchState::Pending => html! {
                            <div class="flex justify-center"><Spinner /></div>
                        },
                        FetchState::Failed(_) => html! {
                            <span class="text-error">{i18n.t("genericError")}</span>
                        },
                        FetchState::Loaded(page) => html! {
                            <>
                                <ul class="menu">
                                    { for page.content.iter().map(|user| html! {
                                        <UserListItem key={user.id.to_string()} user={user.clone()} />
                                    }) }
                                </ul>
                                if page.content.is_empty() {
                                    <span class="text-base-content/70">{i18n.t("userList.empty")}</span>
                                }
                                <div class="card-actions justify-between items-center">
                                    if page.has_previous() {
                                        <button class="btn btn-sm" onclick={go_to(page.page.saturating_sub(1))}>
                                            {i18n.t("userList.previous")}
                                        </button>
                                    } else {
                                        <span></span>
                                    }
                                    if page.has_next() {
                                        <button class="btn btn-sm" onclick={go_to(page.page.saturating_add(1))}>
                                            {i18n.t("userList.next")}
                                        </button>
                                    }
                                </div>
                            </>
                        },
                    }
                }
            </div>
        </div>
    }
}
