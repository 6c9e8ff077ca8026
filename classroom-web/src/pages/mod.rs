mod announcements;
mod dashboard;
pub mod login;
mod quizzes;
mod register;

pub use announcements::AnnouncementsPage;
pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use quizzes::QuizzesPage;
pub use register::RegisterPage;

use crate::models::Resource;

/// Asks the browser to confirm a destructive action. Declines when there is
/// no window to ask.
pub(crate) fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Copy of `item` for the edit dialog. Records the backend never stored have
/// no identifier to update, so they get no edit action.
pub(crate) fn editable<T: Resource>(item: &T) -> Option<T> {
    item.id().is_some().then(|| item.clone())
}
