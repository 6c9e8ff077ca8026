mod actions;
mod api;
mod app;
mod bootstrap;
mod components;
mod config;
mod containers;
mod crash;
mod guards;
mod language;
mod models;
mod pages;
mod routes;
mod token;
mod validation;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod test_support;
#[cfg(all(test, target_arch = "wasm32"))]
mod token_test;

use app::App;
use config::FrontendConfig;
use i18nrs::yew::I18nProvider;
use i18nrs::yew::I18nProviderConfig;
use language::{DEFAULT_LANGUAGE, supported_languages};
use std::collections::HashMap;
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::YewduxRoot;

#[function_component(InternationalApp)]
fn international_app() -> Html {
    let translations: HashMap<&str, &str> = supported_languages()
        .iter()
        .map(|(&key, value)| (key, value.translation))
        .collect();

    let config = I18nProviderConfig {
        translations,
        default_language: DEFAULT_LANGUAGE.to_string(),
        ..Default::default()
    };

    html! {
        <YewduxRoot>
            <I18nProvider ..config>
                <App />
            </I18nProvider>
        </YewduxRoot>
    }
}

/// Routes `log` records to the browser console.
#[cfg(target_arch = "wasm32")]
fn init_logging(level: log::Level) {
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::log_1(&format!("Logger setup failed: {err}").into());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging(_level: log::Level) {}

fn main() {
    crash::install_panic_hook();

    let config = FrontendConfig::new();
    init_logging(config.log_level());
    log::info!("starting Classroom against {}", config.api_base());

    let body = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body());
    match body {
        Some(root) => {
            Renderer::<InternationalApp>::with_root(root.into()).render();
        }
        None => log::error!("no document body to mount into"),
    }
}
