use dioxus::prelude::*;

use crate::{
    auth::{self, LocalStorage},
    route::Route,
};

#[component]
pub fn NavBar() -> Element {
    // subscribe to route changes so the session is re-read after login/logout
    let _ = use_route::<Route>();
    let session = auth::is_logged(&LocalStorage);

    rsx! {
        nav {
            class: "navbar",
            Link {
                class: "brand",
                to: Route::Questions {},
                "heapoverflow"
            }
            ul {
                {match session {
                    Some(email) => rsx! {
                        li {
                            Link { to: Route::CreateQuestion {}, "ask" }
                        }
                        li {
                            Link { to: Route::Profile { email }, "profile" }
                        }
                        li {
                            Link { to: Route::Logout {}, "logout" }
                        }
                    },
                    None => rsx! {
                        li {
                            Link { to: Route::Login {}, "login" }
                        }
                        li {
                            Link { to: Route::CreateUser {}, "create account" }
                        }
                    },
                }}
            }
        }
        main {
            class: "content",
            Outlet::<Route> {}
        }
    }
}
