use crate::actions::session::logout;
use crate::api::use_api_client;
use crate::config::FrontendConfig;
use crate::models::{Announcements, Quizzes, SessionState};
use crate::routes::Route;
use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::functional::{use_dispatch, use_selector};

/// Avatar button with the signed-in user's details and a logout entry.
#[function_component(UserMenu)]
pub fn user_menu() -> Html {
    let navigator = use_navigator();
    let (i18n, ..) = use_translation();
    let client = use_api_client();
    let session = use_dispatch::<SessionState>();
    let announcements = use_dispatch::<Announcements>();
    let quizzes = use_dispatch::<Quizzes>();
    let user_state = use_selector(|state: &SessionState| state.user.clone());
    let Some(user) = (*user_state).clone() else {
        return html! {};
    };

    let avatar = user
        .avatar
        .clone()
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| FrontendConfig::new().default_avatar_url().to_string());

    let logout_button = {
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            logout(&client, &session, &announcements, &quizzes);
            if let Some(navigator) = &navigator {
                navigator.replace(&Route::Login);
            }
        });
        html! {
            <li><a {onclick}>
                <i class="fa-solid fa-right-from-bracket"></i>
                {i18n.t("header.logout")}
            </a></li>
        }
    };

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle avatar">
                <div class="w-9 rounded-full">
                    <img src={avatar} alt={user.display_name().to_string()} />
                </div>
            </div>
            <ul tabIndex={0} class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52">
                <li class="px-2 py-1 text-left">
                    <div class="text-sm font-semibold text-base-content">{ user.display_name() }</div>
                    <div class="text-xs text-base-content/70">{ user.email.clone().unwrap_or_default() }</div>
                </li>
                <div class="divider my-0"></div>
                {logout_button}
            </ul>
        </div>
    }
}
