use crate::actions::resource::{delete, fetch_all};
use crate::api::use_api_client;
use crate::components::loading::Loading;
use crate::components::quiz_form::QuizForm;
use crate::models::{LoadStatus, Quizzes};
use crate::pages::{confirm, editable};
use classroom_shared::models::Quiz;
use i18nrs::yew::use_translation;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::functional::{use_dispatch, use_store_value};

/// Due date as shown in the table. Unparseable values are shown raw.
fn due_label(quiz: &Quiz) -> String {
    match (quiz.due_at(), quiz.due_date.as_deref()) {
        (Some(due), _) => due.format("%Y-%m-%d").to_string(),
        (None, Some(raw)) => raw.to_string(),
        (None, None) => String::new(),
    }
}

#[function_component(QuizzesPage)]
pub fn quizzes_page() -> Html {
    let (i18n, ..) = use_translation();
    let client = use_api_client();
    let store = use_dispatch::<Quizzes>();
    let quizzes = use_store_value::<Quizzes>();
    let dialog_open = use_state(|| false);
    let editing = use_state(|| None::<Quiz>);

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
        Callback::from(move |quiz: Option<Quiz>| {
            editing.set(quiz);
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
        let confirm_text = i18n.t("quizzes.confirm_delete");
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

    let render_row = |quiz: &Quiz| {
        let edit = editable(quiz).map(|quiz| {
            let open_dialog = open_dialog.clone();
            Callback::from(move |_: MouseEvent| open_dialog.emit(Some(quiz.clone())))
        });
        let remove = quiz.id.clone().map(|id| {
            let on_delete = on_delete.clone();
            Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
        });
        html! {
            <tr>
                <td class="font-semibold">{ quiz.name.clone().unwrap_or_default() }</td>
                <td>{ quiz.course.clone().unwrap_or_default() }</td>
                <td>{ quiz.semester.clone().unwrap_or_default() }</td>
                <td>{ quiz.question_count().to_string() }</td>
                <td>{ due_label(quiz) }</td>
                <td class="text-right whitespace-nowrap">
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
                </td>
            </tr>
        }
    };

    let on_new = {
        let open_dialog = open_dialog.clone();
        Callback::from(move |_: MouseEvent| open_dialog.emit(None))
    };
    let first_load = quizzes.status == LoadStatus::Loading && quizzes.list.is_empty();

    html! {
        <div class="p-4 space-y-4">
            <div class="flex justify-between items-center">
                <h1 class="text-2xl font-bold">{ i18n.t("quizzes.title") }</h1>
                <button class="btn btn-primary" onclick={on_new}>
                    <i class="fa-solid fa-circle-plus"></i>
                    { i18n.t("quizzes.new") }
                </button>
            </div>
            if let Some(message) = quizzes.error.clone() {
                <div role="alert" class="alert alert-error"><span>{ message }</span></div>
            }
            if first_load {
                <Loading label={i18n.t("quizzes.loading")} />
            } else if quizzes.list.is_empty() {
                <p class="text-base-content/70">{ i18n.t("quizzes.empty") }</p>
            } else {
                <div class="overflow-x-auto bg-base-100 rounded-box shadow">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{ i18n.t("form.quiz_name") }</th>
                                <th>{ i18n.t("form.course") }</th>
                                <th>{ i18n.t("form.semester") }</th>
                                <th>{ i18n.t("form.questions") }</th>
                                <th>{ i18n.t("form.due_date") }</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            { for quizzes.list.iter().map(render_row) }
                        </tbody>
                    </table>
                </div>
            }
            <QuizForm open={*dialog_open} initial={(*editing).clone()} {on_close} />
        </div>
    }
}
