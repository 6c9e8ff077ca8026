use crate::actions::session::login;
use crate::api::use_api_client;
use crate::components::text_field::TextField;
use crate::guards::ReturnTo;
use crate::models::{LoadStatus, SessionState};
use crate::routes::Route;
use crate::validation::{ValidationError, validate_email, validate_password};
use classroom_shared::models::LoginRequest;
use i18nrs::yew::use_translation;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::functional::{use_dispatch, use_selector};

/// Where to go after signing in: the page the guard bounced, else the dashboard.
fn destination(return_to: Option<&ReturnTo>) -> Route {
    return_to
        .map(|ReturnTo(route)| route.clone())
        .filter(|route| !route.is_guest_only())
        .unwrap_or(Route::Dashboard)
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let (i18n, ..) = use_translation();
    let client = use_api_client();
    let session = use_dispatch::<SessionState>();
    let status = use_selector(|state: &SessionState| state.status);
    let server_error = use_selector(|state: &SessionState| state.error.clone());
    let location = use_location();
    let navigator = use_navigator();

    let email = use_state(String::new);
    let password = use_state(String::new);
    let email_error = use_state(|| None::<ValidationError>);
    let password_error = use_state(|| None::<ValidationError>);
    let submitted = use_state(|| false);

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let email_error = email_error.clone();
        let password_error = password_error.clone();
        let submitted = submitted.clone();
        let return_to = location.and_then(|location| location.state::<ReturnTo>());
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let email_check = validate_email(&email).err();
            let password_check = validate_password(&password).err();
            let valid = email_check.is_none() && password_check.is_none();
            email_error.set(email_check);
            password_error.set(password_check);
            if !valid {
                return;
            }

            submitted.set(true);
            let request = LoginRequest {
                email: (*email).clone(),
                password: (*password).clone(),
            };
            let client = client.clone();
            let session = session.clone();
            let navigator = navigator.clone();
            let target = destination(return_to.as_deref());
            spawn_local(async move {
                if login(&client, &session, request).await.is_ok() {
                    if let Some(navigator) = navigator {
                        navigator.replace(&target);
                    }
                }
            });
        })
    };

    let on_email = {
        let email = email.clone();
        Callback::from(move |value: String| email.set(value))
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |value: String| password.set(value))
    };

    let is_busy = *status == LoadStatus::Loading;
    let failure = if *submitted { (*server_error).clone() } else { None };

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" {onsubmit} novalidate=true>
                    <h2 class="card-title text-2xl justify-center">{ i18n.t("login.title") }</h2>
                    if let Some(message) = failure {
                        <div role="alert" class="alert alert-error">
                            <span>{ message }</span>
                        </div>
                    }
                    <TextField
                        id="email"
                        label={i18n.t("fields.email")}
                        input_type="email"
                        value={(*email).clone()}
                        on_change={on_email}
                        error={(*email_error).as_ref().map(ToString::to_string)}
                    />
                    <TextField
                        id="password"
                        label={i18n.t("fields.password")}
                        input_type="password"
                        value={(*password).clone()}
                        on_change={on_password}
                        error={(*password_error).as_ref().map(ToString::to_string)}
                    />
                    <div class="form-control mt-6">
                        <button class="btn btn-primary w-full" type="submit" disabled={is_busy}>
                            { if is_busy { i18n.t("login.submitting") } else { i18n.t("login.submit") } }
                        </button>
                    </div>
                    <div class="divider">{ i18n.t("login.or") }</div>
                    <p class="text-center text-sm">
                        { i18n.t("login.no_account") }{" "}
                        <Link<Route> to={Route::Register} classes="link link-primary">
                            { i18n.t("login.register_link") }
                        </Link<Route>>
                    </p>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_prefers_return_location() {
        assert_eq!(
            destination(Some(&ReturnTo(Route::Quizzes))),
            Route::Quizzes
        );
        assert_eq!(destination(None), Route::Dashboard);
    }

    #[test]
    fn test_destination_skips_guest_pages() {
        assert_eq!(
            destination(Some(&ReturnTo(Route::Register))),
            Route::Dashboard
        );
    }
}
