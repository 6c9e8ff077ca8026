use crate::api::{ApiClient, ApiError};
use crate::models::{Announcements, Quizzes, SessionState};
use classroom_shared::models::{
    CurrentAdminResponse, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, User,
};
use yewdux::Dispatch;

const LOGIN_PATH: &str = "/auth/login";
const SIGNUP_PATH: &str = "/auth/signup";
const CURRENT_USER_PATH: &str = "/auth/getCurrentAdmin";

/// Signs in and persists the returned token for later requests and page loads.
pub async fn login(
    client: &ApiClient,
    session: &Dispatch<SessionState>,
    request: LoginRequest,
) -> Result<User, ApiError> {
    session.reduce_mut(|state| state.credentials_submitted());
    match client.post::<_, LoginResponse>(LOGIN_PATH, &request).await {
        Ok(response) => {
            client.tokens().persist(&response.token);
            let user = response.user.clone();
            session.reduce_mut(|state| state.login_succeeded(response));
            log::info!("signed in as {}", user.display_name());
            Ok(user)
        }
        Err(err) => {
            let message = err.message_or("Login failed");
            log::warn!("login rejected: {message}");
            session.reduce_mut(|state| state.credentials_rejected(message));
            Err(err)
        }
    }
}

/// Creates an account. The caller is expected to send the user to the login
/// screen afterwards; the returned token is deliberately not kept.
pub async fn register(
    client: &ApiClient,
    session: &Dispatch<SessionState>,
    request: RegisterRequest,
) -> Result<RegisterResponse, ApiError> {
    session.reduce_mut(|state| state.credentials_submitted());
    match client.post::<_, RegisterResponse>(SIGNUP_PATH, &request).await {
        Ok(response) => {
            session.reduce_mut(|state| state.registered());
            log::info!("registered {}", request.email);
            Ok(response)
        }
        Err(err) => {
            let message = err.message_or("Registration failed");
            log::warn!("registration rejected: {message}");
            session.reduce_mut(|state| state.credentials_rejected(message));
            Err(err)
        }
    }
}

/// Resolves the user behind the token currently held by the client.
pub async fn fetch_current_user(
    client: &ApiClient,
    session: &Dispatch<SessionState>,
) -> Result<User, ApiError> {
    session.reduce_mut(|state| state.current_user_requested());
    match client.get::<CurrentAdminResponse>(CURRENT_USER_PATH).await {
        Ok(CurrentAdminResponse { admin }) => {
            let user = admin.clone();
            session.reduce_mut(|state| state.current_user_loaded(admin));
            Ok(user)
        }
        Err(err) => {
            let message = err.message_or("Failed to fetch user");
            session.reduce_mut(|state| state.current_user_rejected(message));
            Err(err)
        }
    }
}

/// Forgets the token, then signs out locally. The two steps are not atomic.
/// Cached lists are dropped so the next user never sees them.
pub fn logout(
    client: &ApiClient,
    session: &Dispatch<SessionState>,
    announcements: &Dispatch<Announcements>,
    quizzes: &Dispatch<Quizzes>,
) {
    client.tokens().clear();
    session.reduce_mut(|state| state.logged_out());
    announcements.reduce_mut(|state| state.clear());
    quizzes.reduce_mut(|state| state.clear());
    log::info!("signed out");
}
