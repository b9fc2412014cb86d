use dioxus::prelude::*;
use dioxus_logger::tracing::warn;

use crate::{
    auth::{self, LocalStorage},
    route::Route,
};

#[component]
pub fn Logout() -> Element {
    let navigator = use_navigator();
    let mut error_signal = use_signal(|| Option::<String>::None);

    use_effect(move || match auth::logout(&LocalStorage) {
        Ok(_) => {
            navigator.replace(Route::Login {});
        }
        Err(e) => {
            warn!("logout: {}", e);
            error_signal.set(Some(e.to_string()));
        }
    });

    match error_signal() {
        Some(e) => rsx! {
            div {
                class: "card",
                h5 {
                    "Could not log out"
                }
                p {
                    class: "error",
                    "{e}"
                }
                div {
                    class: "actions",
                    Link {
                        to: Route::Questions {},
                        "← Back to questions"
                    }
                }
            }
        },
        None => rsx! {
            p {
                "Logging out..."
            }
        },
    }
}
