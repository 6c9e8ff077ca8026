use crate::actions::resource::{create, update};
use crate::api::use_api_client;
use crate::components::text_field::TextField;
use crate::models::Quizzes;
use crate::validation::validate_quiz;
use classroom_shared::models::{Quiz, QuizQuestion};
use i18nrs::yew::use_translation;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yewdux::functional::use_dispatch;

/// Option slots offered for a new question.
pub const OPTION_SLOTS: usize = 4;

pub fn blank_question() -> QuizQuestion {
    QuizQuestion {
        options: vec![String::new(); OPTION_SLOTS],
        ..QuizQuestion::default()
    }
}

/// Starting point of the dialog: a copy of `initial`, or an empty quiz with a
/// single blank question.
pub fn draft_from(initial: Option<&Quiz>) -> Quiz {
    initial.cloned().unwrap_or_else(|| Quiz {
        name: Some(String::new()),
        questions: Some(vec![blank_question()]),
        ..Quiz::default()
    })
}

/// Value for an `<input type="date">`: the date part of `due_date`.
pub fn date_input_value(quiz: &Quiz) -> String {
    quiz.due_date
        .as_deref()
        .and_then(|raw| raw.split('T').next())
        .unwrap_or_default()
        .to_string()
}

/// Applies `change` to question `index`. Missing questions are ignored.
fn edit_question(quiz: &mut Quiz, index: usize, change: impl FnOnce(&mut QuizQuestion)) {
    let questions = quiz.questions.get_or_insert_with(Vec::new);
    if let Some(question) = questions.get_mut(index) {
        change(question);
    }
}

/// Callback that feeds a field's new value through `change` into the draft.
fn draft_setter(
    draft: &UseStateHandle<Quiz>,
    change: impl Fn(&mut Quiz, String) + 'static,
) -> Callback<String> {
    let draft = draft.clone();
    Callback::from(move |value: String| {
        let mut next = (*draft).clone();
        change(&mut next, value);
        draft.set(next);
    })
}

#[derive(Properties, PartialEq)]
pub struct QuizFormProps {
    pub open: bool,
    /// Quiz being edited; `None` creates a new one.
    #[prop_or_default]
    pub initial: Option<Quiz>,
    pub on_close: Callback<()>,
}

/// Create/edit dialog for quizzes, questions included.
#[function_component(QuizForm)]
pub fn quiz_form(props: &QuizFormProps) -> Html {
    let (i18n, ..) = use_translation();
    let client = use_api_client();
    let store = use_dispatch::<Quizzes>();
    let draft = use_state(|| draft_from(props.initial.as_ref()));
    let invalid = use_state(|| None::<String>);
    let saving = use_state(|| false);

    {
        let draft = draft.clone();
        let invalid = invalid.clone();
        use_effect_with((props.initial.clone(), props.open), move |(initial, _)| {
            draft.set(draft_from(initial.as_ref()));
            invalid.set(None);
            || ()
        });
    }

    let on_add_question = {
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*draft).clone();
            next.questions.get_or_insert_with(Vec::new).push(blank_question());
            draft.set(next);
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let invalid = invalid.clone();
        let saving = saving.clone();
        let on_close = props.on_close.clone();
        let editing_id = props.initial.as_ref().and_then(|initial| initial.id.clone());
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let quiz = (*draft).clone();
            if let Err(err) = validate_quiz(&quiz) {
                invalid.set(Some(err.to_string()));
                return;
            }
            invalid.set(None);

            let client = client.clone();
            let store = store.clone();
            let invalid = invalid.clone();
            let saving = saving.clone();
            let on_close = on_close.clone();
            let editing_id = editing_id.clone();
            saving.set(true);
            spawn_local(async move {
                let result = match editing_id {
                    Some(id) => update(&client, &store, &id, &quiz).await,
                    None => create(&client, &store, &quiz).await,
                };
                saving.set(false);
                match result {
                    Ok(_) => on_close.emit(()),
                    Err(err) => invalid.set(Some(err.to_string())),
                }
            });
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let render_question = |(index, question): (usize, &QuizQuestion)| {
        let on_text = draft_setter(&draft, move |quiz, value| {
            edit_question(quiz, index, |question| question.question_text = value);
        });
        let on_remove = {
            let draft = draft.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = (*draft).clone();
                if let Some(questions) = next.questions.as_mut() {
                    if index < questions.len() {
                        questions.remove(index);
                    }
                }
                draft.set(next);
            })
        };
        let on_correct = {
            let draft = draft.clone();
            Callback::from(move |event: Event| {
                let Some(select) = event.target_dyn_into::<HtmlSelectElement>() else {
                    return;
                };
                let Ok(choice) = select.value().parse::<usize>() else {
                    return;
                };
                let mut next = (*draft).clone();
                edit_question(&mut next, index, |question| question.correct_answer_index = choice);
                draft.set(next);
            })
        };
        let options = question.options.iter().enumerate().map(|(slot, option)| {
            let on_option = draft_setter(&draft, move |quiz, value| {
                edit_question(quiz, index, |question| {
                    if let Some(target) = question.options.get_mut(slot) {
                        *target = value;
                    }
                });
            });
            html! {
                <TextField
                    id={format!("question-{index}-option-{slot}")}
                    label={format!("{} {}", i18n.t("form.option"), slot + 1)}
                    value={option.clone()}
                    on_change={on_option}
                />
            }
        });
        let choices = question.options.iter().enumerate().map(|(slot, _)| {
            html! {
                <option value={slot.to_string()} selected={slot == question.correct_answer_index}>
                    { format!("{} {}", i18n.t("form.option"), slot + 1) }
                </option>
            }
        });

        html! {
            <div class="collapse collapse-arrow bg-base-200 mb-2">
                <input type="checkbox" checked={index == 0} />
                <div class="collapse-title font-semibold flex justify-between">
                    { format!("{} {}", i18n.t("form.question"), index + 1) }
                </div>
                <div class="collapse-content flex flex-col gap-1">
                    <TextField
                        id={format!("question-{index}-text")}
                        label={i18n.t("form.question_text")}
                        value={question.question_text.clone()}
                        on_change={on_text}
                    />
                    { for options }
                    <fieldset class="fieldset">
                        <label class="fieldset-legend">{ i18n.t("form.correct") }</label>
                        <select class="select w-full" onchange={on_correct}>{ for choices }</select>
                    </fieldset>
                    <button type="button" class="btn btn-ghost btn-sm text-error self-end" onclick={on_remove}>
                        <i class="fa-solid fa-trash"></i>
                        { i18n.t("form.remove_question") }
                    </button>
                </div>
            </div>
        }
    };

    let title = if props.initial.is_some() {
        i18n.t("quizzes.edit_title")
    } else {
        i18n.t("quizzes.create_title")
    };

    html! {
        <dialog class={classes!("modal", props.open.then_some("modal-open"))}>
            <form class="modal-box w-11/12 max-w-3xl flex flex-col gap-2" {onsubmit}>
                <h3 class="text-lg font-bold">{ title }</h3>
                if let Some(message) = (*invalid).clone() {
                    <div role="alert" class="alert alert-error"><span>{ message }</span></div>
                }
                <div class="grid grid-cols-1 md:grid-cols-2 gap-2">
                    <TextField
                        id="quiz-name"
                        label={i18n.t("form.quiz_name")}
                        value={draft.name.clone().unwrap_or_default()}
                        on_change={draft_setter(&draft, |quiz, value| quiz.name = Some(value))}
                    />
                    <TextField
                        id="quiz-course"
                        label={i18n.t("form.course")}
                        value={draft.course.clone().unwrap_or_default()}
                        on_change={draft_setter(&draft, |quiz, value| quiz.course = Some(value))}
                    />
                    <TextField
                        id="quiz-semester"
                        label={i18n.t("form.semester")}
                        value={draft.semester.clone().unwrap_or_default()}
                        on_change={draft_setter(&draft, |quiz, value| quiz.semester = Some(value))}
                    />
                    <TextField
                        id="quiz-due-date"
                        label={i18n.t("form.due_date")}
                        input_type="date"
                        value={date_input_value(&draft)}
                        on_change={draft_setter(&draft, |quiz, value| {
                            quiz.due_date = (!value.is_empty()).then_some(value);
                        })}
                    />
                </div>
                <h4 class="font-semibold mt-2">{ i18n.t("form.questions") }</h4>
                { for draft.questions.iter().flatten().enumerate().map(render_question) }
                <button type="button" class="btn btn-outline btn-sm self-start" onclick={on_add_question}>
                    <i class="fa-solid fa-circle-plus"></i>
                    { i18n.t("form.add_question") }
                </button>
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_draft_has_one_blank_question() {
        let draft = draft_from(None);
        let questions = draft.questions.unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].options.len(), OPTION_SLOTS);
        assert_eq!(questions[0].correct_answer_index, 0);
    }

    #[test]
    fn test_date_input_value_drops_time() {
        let mut quiz = Quiz {
            due_date: Some("2025-03-10T09:30:00.000Z".to_string()),
            ..Quiz::default()
        };
        assert_eq!(date_input_value(&quiz), "2025-03-10");

        quiz.due_date = Some("2025-04-01".to_string());
        assert_eq!(date_input_value(&quiz), "2025-04-01");

        quiz.due_date = None;
        assert_eq!(date_input_value(&quiz), "");
    }

    #[test]
    fn test_edit_question_ignores_missing_index() {
        let mut quiz = draft_from(None);
        edit_question(&mut quiz, 0, |question| question.question_text = "2+2?".to_string());
        edit_question(&mut quiz, 5, |question| question.question_text = "lost".to_string());

        let questions = quiz.questions.unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question_text, "2+2?");
    }
}
