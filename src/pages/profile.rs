use dioxus::prelude::*;

use crate::{
    api::Api,
    auth::{self, LocalStorage},
    components::avatar::{Avatar, Size},
    route::Route,
};

#[component]
pub fn Profile(email: String) -> Element {
    let user = use_resource(use_reactive((&email,), |(email,)| async move {
        Api::from_session().user_by_email(&email).await
    }));

    let own = auth::is_logged(&LocalStorage).as_deref() == Some(email.as_str());

    let user = match &*user.read_unchecked() {
        Some(Ok(user)) => user.clone(),
        Some(Err(e)) => {
            return rsx! {
                p {
                    class: "error",
                    "{e}"
                }
            }
        }
        None => {
            return rsx! {
                p {
                    class: "muted",
                    "Loading..."
                }
            }
        }
    };

    let since = user
        .since
        .map(|x| x.format("%B %Y").to_string())
        .unwrap_or_default();

    rsx! {
        div {
            class: "card wide",
            div {
                class: "profile",
                Avatar {
                    src: user.avatar,
                    nick: user.nick.clone(),
                    size: Size::Large
                }
                div {
                    h1 {
                        "{user.nick}"
                    }
                    p {
                        class: "muted",
                        "{user.email}"
                    }
                    if !since.is_empty() {
                        p {
                            class: "muted",
                            "Member since {since}"
                        }
                    }
                }
            }
            div {
                class: "actions",
                Link {
                    to: Route::Questions {},
                    "← Back to questions"
                }
                if own {
                    Link {
                        class: "button danger",
                        to: Route::Logout {},
                        "Logout"
                    }
                }
            }
        }
    }
}
