use crate::actions::session::register;
use crate::api::use_api_client;
use crate::components::image_upload::ImageUpload;
use crate::components::text_field::TextField;
use crate::config::FrontendConfig;
use crate::models::{LoadStatus, SessionState};
use crate::routes::Route;
use crate::validation::{
    ValidationError, validate_confirm_password, validate_email, validate_name, validate_password,
};
use classroom_shared::models::RegisterRequest;
use i18nrs::yew::use_translation;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::functional::{use_dispatch, use_selector};

#[derive(Debug, Clone, Default, PartialEq)]
struct RegisterForm {
    name: String,
    email: String,
    password: String,
    confirm_password: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
struct RegisterErrors {
    name: Option<ValidationError>,
    email: Option<ValidationError>,
    password: Option<ValidationError>,
    confirm_password: Option<ValidationError>,
}

impl RegisterErrors {
    fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl RegisterForm {
    fn validate(&self) -> RegisterErrors {
        RegisterErrors {
            name: validate_name(&self.name).err(),
            email: validate_email(&self.email).err(),
            password: validate_password(&self.password).err(),
            confirm_password: validate_confirm_password(&self.confirm_password, &self.password)
                .err(),
        }
    }

    /// The request sent to the backend. Users who skip the upload get the
    /// configured default avatar.
    fn to_request(&self, uploaded: Option<&str>, default_avatar: &str) -> RegisterRequest {
        let avatar = uploaded
            .filter(|url| !url.is_empty())
            .unwrap_or(default_avatar)
            .to_string();
        RegisterRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            avatar: Some(avatar),
        }
    }
}

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let (i18n, ..) = use_translation();
    let client = use_api_client();
    let session = use_dispatch::<SessionState>();
    let status = use_selector(|state: &SessionState| state.status);
    let server_error = use_selector(|state: &SessionState| state.error.clone());
    let navigator = use_navigator();

    let form = use_state(RegisterForm::default);
    // Kept apart from the typed fields: the upload finishes after later
    // keystrokes and must not write an older form back.
    let avatar = use_state(|| None::<String>);
    let errors = use_state(RegisterErrors::default);
    let submitted = use_state(|| false);

    let setter = |apply: fn(&mut RegisterForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };

    let on_avatar = {
        let avatar = avatar.clone();
        Callback::from(move |url: String| avatar.set(Some(url)))
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let submitted = submitted.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let found = form.validate();
            let valid = found.is_empty();
            errors.set(found);
            if !valid {
                return;
            }

            submitted.set(true);
            let request = form.to_request(
                (*avatar).as_deref(),
                FrontendConfig::new().default_avatar_url(),
            );
            let client = client.clone();
            let session = session.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                if register(&client, &session, request).await.is_ok() {
                    if let Some(navigator) = navigator {
                        navigator.replace(&Route::Login);
                    }
                }
            });
        })
    };

    let message = |error: &Option<ValidationError>| error.as_ref().map(ToString::to_string);
    let is_busy = *status == LoadStatus::Loading;
    let failure = if *submitted { (*server_error).clone() } else { None };

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" {onsubmit} novalidate=true>
                    <h2 class="card-title text-2xl justify-center">{ i18n.t("register.title") }</h2>
                    <p class="text-center text-sm text-base-content/70">{ i18n.t("register.subtitle") }</p>
                    if let Some(message) = failure {
                        <div role="alert" class="alert alert-error">
                            <span>{ message }</span>
                        </div>
                    }
                    <ImageUpload on_uploaded={on_avatar} label={i18n.t("register.avatar")} />
                    <TextField
                        id="name"
                        label={i18n.t("register.name")}
                        value={form.name.clone()}
                        on_change={setter(|form, value| form.name = value)}
                        error={message(&errors.name)}
                    />
                    <TextField
                        id="email"
                        label={i18n.t("register.email")}
                        input_type="email"
                        value={form.email.clone()}
                        on_change={setter(|form, value| form.email = value)}
                        error={message(&errors.email)}
                    />
                    <TextField
                        id="password"
                        label={i18n.t("fields.password")}
                        input_type="password"
                        value={form.password.clone()}
                        on_change={setter(|form, value| form.password = value)}
                        error={message(&errors.password)}
                    />
                    <TextField
                        id="confirm-password"
                        label={i18n.t("register.confirm")}
                        input_type="password"
                        value={form.confirm_password.clone()}
                        on_change={setter(|form, value| form.confirm_password = value)}
                        error={message(&errors.confirm_password)}
                    />
                    <div class="form-control mt-4">
                        <button class="btn btn-primary w-full" type="submit" disabled={is_busy}>
                            { i18n.t("register.submit") }
                        </button>
                    </div>
                    <p class="text-center text-sm mt-2">
                        { i18n.t("register.have_account") }{" "}
                        <Link<Route> to={Route::Login} classes="link link-primary">
                            { i18n.t("register.login_link") }
                        </Link<Route>>
                    </p>
                </form>
            </div>
        </div>
    }
}
