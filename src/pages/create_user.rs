use dioxus::prelude::*;
use dioxus_logger::tracing::info;

use crate::{
    api::{Api, NewUser},
    route::Route,
    API_ENDPOINT,
};

#[component]
pub fn CreateUser() -> Element {
    let mut email = use_signal(|| "".to_string());
    let mut nick = use_signal(|| "".to_string());
    let mut password = use_signal(|| "".to_string());
    let mut error_signal = use_signal(|| Option::<String>::None);

    let navigator = use_navigator();
    let error = error_signal();

    rsx! {
        div {
            class: "card",
            h5 {
                "Create account"
            }
            form {
                div {
                    label {
                        r#for: "nick",
                        "Nick"
                    }
                    input {
                        r#type: "text",
                        id: "nick",
                        required: 1,
                        onchange: move |evt| {
                            nick.set(evt.value());
                        }
                    }
                }
                div {
                    label {
                        r#for: "email",
                        "Email"
                    }
                    input {
                        r#type: "text",
                        id: "email",
                        required: 1,
                        onchange: move |evt| {
                            email.set(evt.value());
                        }
                    }
                }
                div {
                    label {
                        r#for: "password",
                        "Password"
                    }
                    input {
                        r#type: "password",
                        id: "password",
                        required: 1,
                        onchange: move |evt| {
                            password.set(evt.value());
                        }
                    }
                }
                if let Some(e) = error {
                    p {
                        class: "error",
                        "{e}"
                    }
                }
                div {
                    class: "actions",
                    Link {
                        to: Route::Login {}, "Or, if you have an account, login!"
                    },
                    button {
                        r#type: "button",
                        onclick: move |_| async move {
                            let user = NewUser {
                                email: email(),
                                nick: nick(),
                                password: password(),
                            };

                            match Api::new(API_ENDPOINT, None).create_user(&user).await {
                                Ok(created) => {
                                    info!("created user {}", created.id);
                                    navigator.replace(Route::Login {});
                                }
                                Err(e) => {
                                    error_signal.set(Some(e.to_string()));
                                }
                            }
                        },
                        "Create account"
                    }
                }
            }
        }
    }
}
