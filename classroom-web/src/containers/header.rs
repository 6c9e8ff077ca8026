use crate::components::user_menu::UserMenu;
use crate::models::SessionState;
use i18nrs::yew::use_translation;
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[function_component(Header)]
pub fn header() -> Html {
    let (i18n, ..) = use_translation();
    let name = use_selector(|state: &SessionState| {
        state
            .user
            .as_ref()
            .map(|user| user.display_name().to_string())
    });

    html! {
        <nav class="navbar justify-between bg-base-300">
            <label for="main-drawer" class="btn btn-ghost btn-square lg:hidden">
                <i class="fa-solid fa-bars text-lg"></i>
            </label>
            <span class="text-lg font-semibold">
                if let Some(name) = (*name).clone() {
                    { format!("{} {name}", i18n.t("header.welcome")) }
                }
            </span>
            <UserMenu />
        </nav>
    }
}
