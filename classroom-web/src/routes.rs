use crate::containers::layout::Layout;
use crate::guards::{RequireAuth, RequireGuest};
use crate::pages::{AnnouncementsPage, DashboardPage, LoginPage, QuizzesPage, RegisterPage};
use strum::{EnumIter, IntoEnumIterator};
use yew::prelude::*;
use yew_router::prelude::*;

/// Every location the app answers to.
#[derive(Debug, Clone, PartialEq, Eq, Routable, EnumIter)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/dashboard")]
    Dashboard,
    #[at("/announcements")]
    Announcements,
    #[at("/quizzes")]
    Quizzes,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Routes only reachable while signed out.
    pub fn is_guest_only(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    /// Entries shown in the sidebar, in display order.
    pub fn nav_routes() -> Vec<Route> {
        Route::iter()
            .filter(|route| matches!(route, Self::Dashboard | Self::Announcements | Self::Quizzes))
            .collect()
    }

    /// Translation key prefix for the route's label and icon.
    pub fn nav_key(&self) -> String {
        let path = self.to_path();
        let name = path.trim_start_matches('/');
        if name.is_empty() {
            "routes.home".to_string()
        } else {
            format!("routes.{name}")
        }
    }
}

/// Switch function for [`Route`]. The root and unknown paths land on the
/// dashboard, behind the same guard.
pub fn switch(route: Route) -> Html {
    log::debug!("switching to route: {route:?}");
    match route {
        Route::Login => html! {
            <RequireGuest {route}><LoginPage /></RequireGuest>
        },
        Route::Register => html! {
            <RequireGuest {route}><RegisterPage /></RequireGuest>
        },
        Route::Home | Route::Dashboard | Route::NotFound => html! {
            <RequireAuth {route}>
                <Layout current_route={Route::Dashboard}><DashboardPage /></Layout>
            </RequireAuth>
        },
        Route::Announcements => html! {
            <RequireAuth route={route.clone()}>
                <Layout current_route={route}><AnnouncementsPage /></Layout>
            </RequireAuth>
        },
        Route::Quizzes => html! {
            <RequireAuth route={route.clone()}>
                <Layout current_route={route}><QuizzesPage /></Layout>
            </RequireAuth>
        },
    }
}
