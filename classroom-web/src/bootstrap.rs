//! Restores the session from a persisted token when the page loads.

use crate::actions::session::fetch_current_user;
use crate::api::{ApiClient, use_api_client};
use crate::models::SessionState;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::Dispatch;
use yewdux::functional::use_dispatch;

thread_local! {
    static PAGE_LATCH: Rc<BootstrapLatch> = Rc::new(BootstrapLatch::default());
}

/// How the page-load session check ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// The check already ran during this page load.
    Skipped,
    /// Nothing persisted; no request was made.
    NoToken,
    /// The token resolved to a user.
    Restored,
    /// The backend refused the token. The token itself is kept.
    Rejected(String),
}

/// Fires at most once. The page-wide instance keeps remounts and re-renders
/// of the root from checking the session twice.
#[derive(Debug, Default)]
pub struct BootstrapLatch {
    fired: Cell<bool>,
}

impl BootstrapLatch {
    /// Returns `true` only on the first call.
    pub fn try_fire(&self) -> bool {
        !self.fired.replace(true)
    }

    pub fn has_fired(&self) -> bool {
        self.fired.get()
    }
}

/// Runs [`restore_session`] unless `latch` already fired.
pub async fn bootstrap(
    latch: &BootstrapLatch,
    client: &ApiClient,
    session: &Dispatch<SessionState>,
) -> BootstrapOutcome {
    if !latch.try_fire() {
        log::debug!("session bootstrap already ran");
        return BootstrapOutcome::Skipped;
    }
    restore_session(client, session).await
}

/// Reads the persisted token into the client and, when there is one, asks the
/// backend who it belongs to. Always leaves `initialized` set.
pub async fn restore_session(
    client: &ApiClient,
    session: &Dispatch<SessionState>,
) -> BootstrapOutcome {
    if client.tokens().hydrate().is_none() {
        session.reduce_mut(|state| state.mark_initialized());
        return BootstrapOutcome::NoToken;
    }
    match fetch_current_user(client, session).await {
        Ok(user) => {
            log::info!("restored session for {}", user.display_name());
            BootstrapOutcome::Restored
        }
        Err(err) => {
            let message = err.message_or("Failed to fetch user");
            log::warn!("persisted token was not accepted: {message}");
            BootstrapOutcome::Rejected(message)
        }
    }
}

/// Starts the page-load session check from the component tree. Mount once, near
/// the root, inside the yewdux and API client providers.
#[hook]
pub fn use_session_bootstrap() {
    let session = use_dispatch::<SessionState>();
    let client = use_api_client();
    use_effect_with((), move |_| {
        let latch = PAGE_LATCH.with(Rc::clone);
        spawn_local(async move {
            bootstrap(&latch, &client, &session).await;
        });
        || ()
    });
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::FakeBackend;
    use crate::token::MemoryTokenStore;
    use axum::http::{HeaderMap, StatusCode, header};
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;
    use yewdux::Context;

    fn routes() -> Router {
        Router::new().route(
            "/auth/getCurrentAdmin",
            get(|headers: HeaderMap| async move {
                let valid = headers
                    .get(header::AUTHORIZATION)
                    .and_then(|value| value.to_str().ok())
                    == Some("Bearer good");
                if valid {
                    (StatusCode::OK, Json(json!({ "admin": { "_id": "u1", "name": "Ada" } })))
                } else {
                    (StatusCode::UNAUTHORIZED, Json(json!({ "message": "invalid token" })))
                }
            }),
        )
    }

    fn session() -> Dispatch<SessionState> {
        Dispatch::new(&Context::new())
    }

    #[tokio::test]
    async fn test_no_token_makes_no_request() {
        let backend = FakeBackend::start(routes()).await;
        let client = backend.client(&MemoryTokenStore::new());
        let session = session();

        let outcome = restore_session(&client, &session).await;

        assert_eq!(outcome, BootstrapOutcome::NoToken);
        assert_eq!(backend.hits(), 0);
        let state = session.get();
        assert!(state.initialized);
        assert!(!state.logged_in);
    }

    #[tokio::test]
    async fn test_valid_token_restores_user() {
        let backend = FakeBackend::start(routes()).await;
        let client = backend.client(&MemoryTokenStore::with_token("good"));
        let session = session();

        let outcome = restore_session(&client, &session).await;

        assert_eq!(outcome, BootstrapOutcome::Restored);
        let state = session.get();
        assert!(state.logged_in);
        assert!(state.initialized);
        assert_eq!(
            state.user.as_ref().and_then(|user| user.name.as_deref()),
            Some("Ada")
        );
        assert_eq!(backend.authorizations(), vec![Some("Bearer good".to_string())]);
    }

    #[tokio::test]
    async fn test_rejected_token_is_kept() {
        let backend = FakeBackend::start(routes()).await;
        let store = MemoryTokenStore::with_token("expired");
        let client = backend.client(&store);
        let session = session();

        let outcome = restore_session(&client, &session).await;

        assert_eq!(outcome, BootstrapOutcome::Rejected("invalid token".to_string()));
        let state = session.get();
        assert!(state.initialized);
        assert!(!state.logged_in);
        assert_eq!(store.persisted().as_deref(), Some("expired"));
        assert_eq!(client.tokens().current().as_deref(), Some("expired"));
    }

    #[tokio::test]
    async fn test_latch_runs_once() {
        let backend = FakeBackend::start(routes()).await;
        let client = backend.client(&MemoryTokenStore::with_token("good"));
        let session = session();
        let latch = BootstrapLatch::default();

        let first = bootstrap(&latch, &client, &session).await;
        let second = bootstrap(&latch, &client, &session).await;

        assert_eq!(first, BootstrapOutcome::Restored);
        assert_eq!(second, BootstrapOutcome::Skipped);
        assert!(latch.has_fired());
        assert_eq!(backend.hits(), 1);
    }

    #[test]
    fn test_latch_fires_once() {
        let latch = BootstrapLatch::default();
        assert!(!latch.has_fired());
        assert!(latch.try_fire());
        assert!(!latch.try_fire());
    }
}
