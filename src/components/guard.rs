use dioxus::prelude::*;
use dioxus_logger::tracing::info;

use crate::{
    auth::{self, LocalStorage},
    guard::{self, Navigation},
    route::Route,
};

/// Outermost layout, consulted on every route change.
#[component]
pub fn Guard() -> Element {
    let route = use_route::<Route>();
    let navigator = use_navigator();

    let session = auth::is_logged(&LocalStorage);
    let navigation = guard::check(&route, session.as_deref());

    use_effect(use_reactive((&navigation,), move |(navigation,)| {
        if let Navigation::Redirect(target) = navigation {
            info!("guard redirecting to {}", target.name());
            navigator.replace(target);
        }
    }));

    match navigation {
        Navigation::Proceed => rsx! {
            Outlet::<Route> {}
        },
        Navigation::Redirect(_) => rsx! {},
    }
}
