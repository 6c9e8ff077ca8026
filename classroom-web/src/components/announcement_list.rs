use crate::models::{Announcements, LoadStatus};
use crate::routes::Route;
use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::functional::use_store_value;

/// Announcements shown on the dashboard.
pub const LATEST_ANNOUNCEMENTS: usize = 5;

/// Latest announcements card on the dashboard.
#[function_component(AnnouncementList)]
pub fn announcement_list() -> Html {
    let (i18n, ..) = use_translation();
    let announcements = use_store_value::<Announcements>();

    if announcements.status == LoadStatus::Loading && announcements.list.is_empty() {
        return html! { <p>{ i18n.t("announcements.loading") }</p> };
    }

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex justify-between items-center mb-2">
                    <h2 class="card-title">{ i18n.t("announcements.title") }</h2>
                    <Link<Route> to={Route::Announcements} classes="link link-primary text-sm font-bold">
                        { i18n.t("dashboard.all") }
                    </Link<Route>>
                </div>
                if announcements.list.is_empty() {
                    <p>{ i18n.t("announcements.none") }</p>
                } else {
                    <ul class="list">
                        { for announcements.list.iter().take(LATEST_ANNOUNCEMENTS).map(|announcement| html! {
                            <li class="list-row">
                                <div class="flex flex-col gap-1">
                                    <span class="font-semibold">{ announcement.title.clone() }</span>
                                    if let Some(course) = announcement.course.clone().filter(|course| !course.is_empty()) {
                                        <span class="text-xs uppercase text-base-content/60">{ course }</span>
                                    }
                                    <span class="text-sm text-base-content/80">{ announcement.description.clone() }</span>
                                </div>
                            </li>
                        }) }
                    </ul>
                }
            </div>
        </div>
    }
}
