use crate::actions::resource::fetch_all;
use crate::api::use_api_client;
use crate::components::announcement_list::AnnouncementList;
use crate::components::due_list::DueList;
use crate::config::FrontendConfig;
use crate::models::{Announcements, Quizzes, SessionState};
use i18nrs::yew::use_translation;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yewdux::functional::{use_dispatch, use_selector};

/// Dashboard page component
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let (i18n, _) = use_translation();
    let client = use_api_client();
    let announcements = use_dispatch::<Announcements>();
    let quizzes = use_dispatch::<Quizzes>();
    let name = use_selector(|state: &SessionState| {
        state
            .user
            .as_ref()
            .map_or_else(|| "User".to_string(), |user| user.display_name().to_string())
    });
    let help_url = FrontendConfig::new().help_url().to_string();

    use_effect_with((), move |_| {
        spawn_local(async move {
            // Failures are recorded in the stores.
            let _ = fetch_all(&client, &announcements).await;
            let _ = fetch_all(&client, &quizzes).await;
        });
        || ()
    });

    html! {
        <div class="p-4 space-y-6">
            <div class="card bg-base-200 shadow-xl">
                <div class="card-body md:flex-row md:items-center gap-4">
                    <div class="flex-1">
                        <h1 class="text-3xl font-bold">{ i18n.t("dashboard.headline") }</h1>
                        <p class="mt-2">{ format!("{}, {}.", i18n.t("dashboard.greeting"), *name) }</p>
                        <p class="mt-1">{ i18n.t("dashboard.intro") }</p>
                        <div class="card-actions mt-4">
                            <a href={help_url} target="_blank" rel="noopener noreferrer" class="btn btn-primary">
                                { i18n.t("dashboard.tips") }
                            </a>
                        </div>
                    </div>
                    <Icon icon_id={IconId::HeroiconsOutlineAcademicCap} class="w-28 h-28 text-primary hidden md:block" />
                </div>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-4 gap-6">
                <div class="lg:col-span-3">
                    <AnnouncementList />
                </div>
                <div>
                    <DueList />
                </div>
            </div>
        </div>
    }
}
