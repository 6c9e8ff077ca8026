use crate::routes::Route;
use i18nrs::yew::use_translation;
use yew::{Html, Properties, classes, function_component, html};
use yew_router::prelude::Link;

#[derive(Properties, PartialEq, Eq)]
pub struct NavItemProps {
    pub route: Route,
    pub current_route: Option<Route>,
}

/// One sidebar entry. Label and icon come from the translation bundle.
#[function_component(NavItem)]
pub fn nav_item(props: &NavItemProps) -> Html {
    let (i18n, ..) = use_translation();

    let key = props.route.nav_key();
    let route_name = i18n.t(&format!("{key}.title"));
    let route_icon = i18n.t(&format!("{key}.icon"));

    let active_route_class = if props.current_route.as_ref() == Some(&props.route) {
        "menu-active"
    } else {
        ""
    };

    html! {
      <li>
          <Link<Route> to={props.route.clone()} classes={classes!("gap-3", active_route_class)}>
              <i class={classes!("fa-solid", "fa-fw", format!("fa-{route_icon}"))}></i>
              {route_name}
          </Link<Route>>
      </li>
    }
}
