use crate::models::Quizzes;
use crate::routes::Route;
use chrono::{DateTime, Utc};
use classroom_shared::models::Quiz;
use i18nrs::yew::use_translation;
use std::cmp::Ordering;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::functional::use_store_value;

/// How many quizzes the dashboard lists.
pub const DUE_LIST_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    Due,
    Overdue,
    NoDueDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DueItem {
    pub quiz: Quiz,
    pub due_at: Option<DateTime<Utc>>,
    pub status: DueStatus,
}

/// The `limit` quizzes due first. Quizzes without a parseable due date go
/// last and otherwise keep their list order.
pub fn due_soonest(quizzes: &[Quiz], now: DateTime<Utc>, limit: usize) -> Vec<DueItem> {
    let mut dated: Vec<(&Quiz, Option<DateTime<Utc>>)> =
        quizzes.iter().map(|quiz| (quiz, quiz.due_at())).collect();
    dated.sort_by(|(_, a), (_, b)| match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    dated
        .into_iter()
        .take(limit)
        .map(|(quiz, due_at)| DueItem {
            quiz: quiz.clone(),
            due_at,
            status: match due_at {
                Some(due) if due < now => DueStatus::Overdue,
                Some(_) => DueStatus::Due,
                None => DueStatus::NoDueDate,
            },
        })
        .collect()
}

/// "What's due" card on the dashboard.
#[function_component(DueList)]
pub fn due_list() -> Html {
    let (i18n, ..) = use_translation();
    let quizzes = use_store_value::<Quizzes>();
    let items = due_soonest(&quizzes.list, Utc::now(), DUE_LIST_LEN);

    let render_item = |item: &DueItem| {
        let count = item.quiz.question_count();
        let (label_class, label) = match (item.status, item.due_at) {
            (DueStatus::Overdue, Some(due)) => (
                "text-error",
                format!("{}: {}", i18n.t("dashboard.overdue"), due.format("%Y-%m-%d %H:%M")),
            ),
            (_, Some(due)) => (
                "text-base-content/70",
                format!("{}: {}", i18n.t("dashboard.due"), due.format("%Y-%m-%d %H:%M")),
            ),
            (_, None) => ("text-base-content/70", i18n.t("dashboard.no_due_date")),
        };
        html! {
            <div class="card card-border bg-base-200 mb-3">
                <div class="card-body p-4 gap-1">
                    <div class="flex items-center gap-2">
                        <i class="fa-solid fa-circle-question text-primary"></i>
                        <span class="font-semibold">{ item.quiz.name.clone().unwrap_or_default() }</span>
                    </div>
                    if let Some(course) = item.quiz.course.clone().filter(|course| !course.is_empty()) {
                        <span class="text-sm text-base-content/70">{ course }</span>
                    }
                    <span class="text-sm text-base-content/70">
                        { format!("{count} {}", i18n.t("quizzes.questions")) }
                    </span>
                    <span class={classes!("text-xs", label_class)}>{ label }</span>
                </div>
            </div>
        }
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex justify-between items-center mb-2">
                    <h2 class="card-title">{ i18n.t("dashboard.whats_due") }</h2>
                    <Link<Route> to={Route::Quizzes} classes="link link-primary text-sm font-bold">
                        { i18n.t("dashboard.all") }
                    </Link<Route>>
                </div>
                if items.is_empty() {
                    <p>{ i18n.t("dashboard.nothing_due") }</p>
                } else {
                    { for items.iter().map(render_item) }
                }
            </div>
        </div>
    }
}
