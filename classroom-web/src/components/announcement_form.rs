use crate::actions::resource::{create, update};
use crate::api::use_api_client;
use crate::components::text_field::TextField;
use crate::models::{Announcements, SessionState};
use crate::validation::{ValidationError, validate_announcement};
use classroom_shared::models::Announcement;
use i18nrs::yew::use_translation;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::functional::{use_dispatch, use_selector};

#[derive(Properties, PartialEq)]
pub struct AnnouncementFormProps {
    pub open: bool,
    /// Announcement being edited; `None` creates a new one.
    #[prop_or_default]
    pub initial: Option<Announcement>,
    pub on_close: Callback<()>,
}

/// Editable copy of an announcement. Starts from `initial` so fields the form
/// does not show survive an edit.
fn draft_from(initial: Option<&Announcement>) -> Announcement {
    initial.cloned().unwrap_or_default()
}

/// Create/edit dialog for announcements.
#[function_component(AnnouncementForm)]
pub fn announcement_form(props: &AnnouncementFormProps) -> Html {
    let (i18n, ..) = use_translation();
    let client = use_api_client();
    let store = use_dispatch::<Announcements>();
    let author = use_selector(|state: &SessionState| {
        state.user.as_ref().and_then(|user| user.id.clone())
    });
    let draft = use_state(|| draft_from(props.initial.as_ref()));
    let invalid = use_state(|| None::<ValidationError>);
    let submit_error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    {
        let draft = draft.clone();
        let invalid = invalid.clone();
        let submit_error = submit_error.clone();
        use_effect_with((props.initial.clone(), props.open), move |(initial, _)| {
            draft.set(draft_from(initial.as_ref()));
            invalid.set(None);
            submit_error.set(None);
            || ()
        });
    }

    let edit = |apply: fn(&mut Announcement, String)| {
        let draft = draft.clone();
        Callback::from(move |value: String| {
            let mut next = (*draft).clone();
            apply(&mut next, value);
            draft.set(next);
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let invalid = invalid.clone();
        let submit_error = submit_error.clone();
        let saving = saving.clone();
        let on_close = props.on_close.clone();
        let editing_id = props.initial.as_ref().and_then(|initial| initial.id.clone());
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let mut announcement = (*draft).clone();
            if let Err(err) = validate_announcement(&announcement) {
                invalid.set(Some(err));
                return;
            }
            invalid.set(None);
            submit_error.set(None);
            if announcement.user.is_none() {
                announcement.user = (*author).clone();
            }

            let client = client.clone();
            let store = store.clone();
            let submit_error = submit_error.clone();
            let saving = saving.clone();
            let on_close = on_close.clone();
            let editing_id = editing_id.clone();
            saving.set(true);
            spawn_local(async move {
                let result = match editing_id {
                    Some(id) => update(&client, &store, &id, &announcement).await,
                    None => create(&client, &store, &announcement).await,
                };
                saving.set(false);
                match result {
                    Ok(_) => on_close.emit(()),
                    Err(err) => submit_error.set(Some(err.to_string())),
                }
            });
        })
    };

    let field_error = |field: &'static str| match &*invalid {
        Some(err @ ValidationError::Required(name)) if *name == field => Some(err.to_string()),
        _ => None,
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let title = if props.initial.is_some() {
        i18n.t("announcements.edit_title")
    } else {
        i18n.t("announcements.create_title")
    };

    html! {
        <dialog class={classes!("modal", props.open.then_some("modal-open"))}>
            <form class="modal-box flex flex-col gap-2" {onsubmit}>
                <h3 class="text-lg font-bold">{ title }</h3>
                if let Some(message) = (*submit_error).clone() {
                    <div role="alert" class="alert alert-error"><span>{ message }</span></div>
                }
                <TextField
                    id="announcement-title"
                    label={i18n.t("form.title")}
                    value={draft.title.clone()}
                    on_change={edit(|item, value| item.title = value)}
                    error={field_error("Title")}
                />
                <TextField
                    id="announcement-description"
                    label={i18n.t("form.description")}
                    value={draft.description.clone()}
                    multiline=true
                    on_change={edit(|item, value| item.description = value)}
                    error={field_error("Description")}
                />
                <div class="grid grid-cols-1 md:grid-cols-2 gap-2">
                    <TextField
                        id="announcement-course"
                        label={i18n.t("form.course")}
                        value={draft.course.clone().unwrap_or_default()}
                        on_change={edit(|item, value| item.course = Some(value))}
                    />
                    <TextField
                        id="announcement-semester"
                        label={i18n.t("form.semester")}
                        value={draft.semester.clone().unwrap_or_default()}
                        on_change={edit(|item, value| item.semester = Some(value))}
                    />
                </div>
                <div class="modal-action">
                    <button type="button" class="btn btn-ghost" onclick={on_cancel}>
                        { i18n.t("form.cancel") }
                    </button>
                    <button type="submit" class="btn btn-primary" disabled={*saving}>
                        { i18n.t("form.save") }
                    </button>
                </div>
            </form>
        </dialog>
    }
}
