use crate::components::nav_item::NavItem;
use crate::containers::header::Header;
use crate::routes::Route;
use i18nrs::yew::use_translation;
use web_sys::window;
use yew::{Children, Html, Properties, classes, function_component, html, use_effect_with};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub current_route: Route,
}

/// Authenticated shell: header, sidebar navigation and the page body.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let (i18n, ..) = use_translation();

    // Adds data-theme attribute to html tag for theme support
    use_effect_with((), |_| {
        if let Some(html_element) = window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        {
            html_element
                .set_attribute("data-theme", "light")
                .unwrap_or_default();
        }
        || {}
    });

    let current_route = Some(props.current_route.clone());

    html! {
        <div class="drawer lg:drawer-open min-h-screen bg-base-100">
            <input id="main-drawer" type="checkbox" class="drawer-toggle" />
            <div class="drawer-content flex flex-col">
                <Header />
                <main class={classes!("flex-grow", "p-4", "transition-all", "duration-300")}>
                    { props.children.clone() }
                </main>
                <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                    <p>{ i18n.t("app.footer") }</p>
                </footer>
            </div>
            <div class="drawer-side">
                <label for="main-drawer" aria-label="close sidebar" class="drawer-overlay"></label>
                <aside class="bg-base-200 min-h-full w-64">
                    <div class="p-4 text-xl font-bold flex items-center gap-2">
                        <i class="fa-solid fa-graduation-cap text-primary"></i>
                        { i18n.t("app.title") }
                    </div>
                    <ul class="menu w-full gap-1">
                        { for Route::nav_routes().into_iter().map(|route| html! {
                            <NavItem {route} current_route={current_route.clone()} />
                        }) }
                    </ul>
                </aside>
            </div>
        </div>
    }
}
