use crate::components::user_list::UserList;
use i18nrs::yew::use_translation;
use yew::prelude::*;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let (i18n, _) = use_translation();

    html! {
        <div class="flex flex-col gap-4" data-testid="home-page">
            <h1 class="text-3xl font-bold">{i18n.t("app.title")}</h1>
            <UserList />
        </div>
    }
}
