//! Route guards for signed-in and signed-out areas.
//!
//! Both guards render nothing until the session check has finished, so a page
//! refresh with a valid token never flashes the login screen (or the other
//! way round).

use crate::components::loading::Loading;
use crate::models::SessionState;
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::functional::use_store_value;

/// Which side of authentication a guarded area belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardKind {
    /// Only signed-in users; others go to the login screen.
    Auth,
    /// Only signed-out users; others go to the dashboard.
    Guest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// The session check is still running.
    Pending,
    Render,
    Redirect { to: Route, from: Option<Route> },
}

/// Location the user was heading to before being sent to log in. Travels as
/// history state on the redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnTo(pub Route);

/// Decides what a guard shows for `requested` given the current session.
pub fn evaluate(kind: GuardKind, session: &SessionState, requested: &Route) -> GuardDecision {
    if !session.is_resolved() {
        return GuardDecision::Pending;
    }
    match (kind, session.logged_in) {
        (GuardKind::Auth, true) | (GuardKind::Guest, false) => GuardDecision::Render,
        (GuardKind::Auth, false) => GuardDecision::Redirect {
            to: Route::Login,
            from: Some(requested.clone()),
        },
        (GuardKind::Guest, true) => GuardDecision::Redirect {
            to: Route::Dashboard,
            from: None,
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct GuardProps {
    pub route: Route,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(RequireAuth)]
pub fn require_auth(props: &GuardProps) -> Html {
    html! {
        <Guard kind={GuardKind::Auth} route={props.route.clone()}>
            { props.children.clone() }
        </Guard>
    }
}

#[function_component(RequireGuest)]
pub fn require_guest(props: &GuardProps) -> Html {
    html! {
        <Guard kind={GuardKind::Guest} route={props.route.clone()}>
            { props.children.clone() }
        </Guard>
    }
}

#[derive(Properties, PartialEq)]
struct GuardViewProps {
    kind: GuardKind,
    route: Route,
    #[prop_or_default]
    children: Html,
}

#[function_component(Guard)]
fn guard(props: &GuardViewProps) -> Html {
    let session = use_store_value::<SessionState>();
    let navigator = use_navigator();
    let decision = evaluate(props.kind, &session, &props.route);

    {
        let decision = decision.clone();
        use_effect_with(decision, move |decision| {
            if let (GuardDecision::Redirect { to, from }, Some(navigator)) = (decision, navigator) {
                log::debug!("guard redirecting to {to:?}");
                match from {
                    Some(from) => navigator.replace_with_state(to, ReturnTo(from.clone())),
                    None => navigator.replace(to),
                }
            }
            || ()
        });
    }

    match decision {
        GuardDecision::Pending => html! { <Loading /> },
        GuardDecision::Render => props.children.clone(),
        GuardDecision::Redirect { .. } => html! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use classroom_shared::models::{LoginResponse, User};

    fn signed_out() -> SessionState {
        let mut state = SessionState::default();
        state.mark_initialized();
        state
    }

    fn signed_in() -> SessionState {
        let mut state = SessionState::default();
        state.login_succeeded(LoginResponse {
            token: "tok".to_string(),
            user: User::default(),
        });
        state
    }

    #[test]
    fn test_both_guards_wait_for_session_check() {
        let unresolved = SessionState::default();
        for kind in [GuardKind::Auth, GuardKind::Guest] {
            assert_eq!(
                evaluate(kind, &unresolved, &Route::Quizzes),
                GuardDecision::Pending
            );
        }
    }

    #[test]
    fn test_auth_guard_redirects_with_return_location() {
        assert_eq!(
            evaluate(GuardKind::Auth, &signed_out(), &Route::Quizzes),
            GuardDecision::Redirect {
                to: Route::Login,
                from: Some(Route::Quizzes),
            }
        );
    }

    #[test]
    fn test_auth_guard_renders_when_signed_in() {
        assert_eq!(
            evaluate(GuardKind::Auth, &signed_in(), &Route::Announcements),
            GuardDecision::Render
        );
    }

    #[test]
    fn test_guest_guard() {
        assert_eq!(
            evaluate(GuardKind::Guest, &signed_out(), &Route::Login),
            GuardDecision::Render
        );
        assert_eq!(
            evaluate(GuardKind::Guest, &signed_in(), &Route::Register),
            GuardDecision::Redirect {
                to: Route::Dashboard,
                from: None,
            }
        );
    }

    #[test]
    fn test_rejected_token_counts_as_signed_out() {
        let mut state = SessionState::default();
        state.current_user_requested();
        assert_eq!(
            evaluate(GuardKind::Auth, &state, &Route::Dashboard),
            GuardDecision::Pending
        );

        state.current_user_rejected("jwt expired".to_string());
        assert_eq!(
            evaluate(GuardKind::Auth, &state, &Route::Dashboard),
            GuardDecision::Redirect {
                to: Route::Login,
                from: Some(Route::Dashboard),
            }
        );
    }
}
