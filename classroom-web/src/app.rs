use crate::api::ApiClient;
use crate::bootstrap::use_session_bootstrap;
use crate::routes::{Route, switch};
use yew::{ContextProvider, Html, function_component, html, use_memo};
use yew_router::prelude::*;

/// Runs the page-load session check once, then hands over to the router.
#[function_component(SessionRoot)]
fn session_root() -> Html {
    use_session_bootstrap();

    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let client = use_memo((), |_| ApiClient::shared());

    html! {
        <ContextProvider<ApiClient> context={(*client).clone()}>
            <SessionRoot />
        </ContextProvider<ApiClient>>
    }
}
