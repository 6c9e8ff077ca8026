use super::LoadStatus;
use classroom_shared::models::{LoginResponse, User};
use yewdux::Store;

/// Authentication state of the page.
///
/// `initialized` is a one-way latch: once any session check has finished it
/// stays true for the life of the page, and route guards wait on it.
/// `logged_in` and `user` always change in the same transition.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct SessionState {
    pub logged_in: bool,
    pub token: Option<String>,
    pub user: Option<User>,
    pub status: LoadStatus,
    pub error: Option<String>,
    pub initialized: bool,
}

impl SessionState {
    /// Whether guards may act on this state yet.
    pub fn is_resolved(&self) -> bool {
        self.initialized
    }

    /// Login or registration started.
    pub fn credentials_submitted(&mut self) {
        self.status = LoadStatus::Loading;
        self.error = None;
    }

    pub fn login_succeeded(&mut self, response: LoginResponse) {
        self.status = LoadStatus::Succeeded;
        self.token = Some(response.token);
        self.user = Some(response.user);
        self.logged_in = true;
        self.initialized = true;
    }

    /// Shared failure path of login and registration. A failed attempt still
    /// counts as a finished session check.
    pub fn credentials_rejected(&mut self, message: String) {
        self.status = LoadStatus::Failed;
        self.error = Some(message);
        self.initialized = true;
    }

    /// Registration never signs the user in.
    pub fn registered(&mut self) {
        self.status = LoadStatus::Succeeded;
        self.logged_in = false;
        self.initialized = true;
    }

    pub fn current_user_requested(&mut self) {
        self.status = LoadStatus::Loading;
    }

    pub fn current_user_loaded(&mut self, user: User) {
        self.status = LoadStatus::Succeeded;
        self.set_user(user);
    }

    /// The persisted token was refused. `logged_in` and `token` are left as
    /// they were; only the latch and the failure are recorded.
    pub fn current_user_rejected(&mut self, message: String) {
        self.status = LoadStatus::Failed;
        self.error = Some(message);
        self.initialized = true;
    }

    pub fn set_user(&mut self, user: User) {
        self.user = Some(user);
        self.logged_in = true;
        self.initialized = true;
    }

    /// Local sign-out. Clearing the persisted token is up to the caller.
    pub fn logged_out(&mut self) {
        self.logged_in = false;
        self.token = None;
        self.user = None;
        self.status = LoadStatus::Idle;
        self.error = None;
        self.initialized = true;
    }

    pub fn mark_initialized(&mut self) {
        self.initialized = true;
    }
}
