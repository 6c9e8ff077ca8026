use crate::actions::resource::{delete, fetch_all};
use crate::api::use_api_client;
use crate::components::announcement_form::AnnouncementForm;
use crate::components::loading::Loading;
use crate::models::{Announcements, LoadStatus};
use crate::pages::{confirm, editable};
use classroom_shared::models::Announcement;
use i18nrs::yew::use_translation;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::functional::{use_dispatch, use_store_value};

/// Announcements management: list, create, edit and delete.
#[function_component(AnnouncementsPage)]
pub fn announcements_page() -> Html {
    let (i18n, ..) = use_translation();
    let client = use_api_client();
    let store = use_dispatch::<Announcements>();
    let announcements = use_store_value::<Announcements>();
    let dialog_open = use_state(|| false);
    let editing = use_state(|| None::<Announcement>);

    {
        let client = client.clone();
        let store = store.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let _ = fetch_all(&client, &store).await;
            });
            || ()
        });
    }

    let open_dialog = {
        let dialog_open = dialog_open.clone();
        let editing = editing.clone();
        Callback::from(move |announcement: Option<Announcement>| {
            editing.set(announcement);
            dialog_open.set(true);
        })
    };

    let on_close = {
        let dialog_open = dialog_open.clone();
        let editing = editing.clone();
        Callback::from(move |()| {
            dialog_open.set(false);
            editing.set(None);
        })
    };

    let on_delete = {
        let confirm_text = i18n.t("announcements.confirm_delete");
        Callback::from(move |id: String| {
            if !confirm(&confirm_text) {
                return;
            }
            let client = client.clone();
            let store = store.clone();
            spawn_local(async move {
                let _ = delete(&client, &store, &id).await;
            });
        })
    };

    let render_row = |announcement: &Announcement| {
        let edit = editable(announcement).map(|announcement| {
            let open_dialog = open_dialog.clone();
            Callback::from(move |_: MouseEvent| open_dialog.emit(Some(announcement.clone())))
        });
        let remove = announcement.id.clone().map(|id| {
            let on_delete = on_delete.clone();
            Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
        });
        html! {
            <li class="list-row items-start">
                <div class="list-col-grow flex flex-col gap-1">
                    <span class="font-semibold">{ announcement.title.clone() }</span>
                    <span class="text-xs uppercase text-base-content/60">
                        { [announcement.course.clone(), announcement.semester.clone()]
                            .into_iter()
                            .flatten()
                            .filter(|part| !part.is_empty())
                            .collect::<Vec<_>>()
                            .join(" · ") }
                    </span>
                    <p class="text-sm text-base-content/80 whitespace-pre-line">{ announcement.description.clone() }</p>
                </div>
                if let Some(onclick) = edit {
                    <button class="btn btn-ghost btn-sm btn-square" {onclick}>
                        <i class="fa-solid fa-pen"></i>
                    </button>
                }
                if let Some(onclick) = remove {
                    <button class="btn btn-ghost btn-sm btn-square text-error" {onclick}>
                        <i class="fa-solid fa-trash"></i>
                    </button>
                }
            </li>
        }
    };

    let on_new = {
        let open_dialog = open_dialog.clone();
        Callback::from(move |_: MouseEvent| open_dialog.emit(None))
    };
    let first_load = announcements.status == LoadStatus::Loading && announcements.list.is_empty();

    html! {
        <div class="p-4 space-y-4">
            <div class="flex justify-between items-center">
                <h1 class="text-2xl font-bold">{ i18n.t("announcements.title") }</h1>
                <button class="btn btn-primary" onclick={on_new}>
                    <i class="fa-solid fa-circle-plus"></i>
                    { i18n.t("announcements.new") }
                </button>
            </div>
            if let Some(message) = announcements.error.clone() {
                <div role="alert" class="alert alert-error"><span>{ message }</span></div>
            }
            if first_load {
                <Loading label={i18n.t("announcements.loading")} />
            } else if announcements.list.is_empty() {
                <p class="text-base-content/70">{ i18n.t("announcements.empty") }</p>
            } else {
                <ul class="list bg-base-100 rounded-box shadow">
                    { for announcements.list.iter().map(render_row) }
                </ul>
            }
            <AnnouncementForm open={*dialog_open} initial={(*editing).clone()} {on_close} />
        </div>
    }
}
