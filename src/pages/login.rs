use dioxus::prelude::*;

use crate::{
    api::Api,
    auth::{LocalStorage, TokenStore},
    route::Route,
    API_ENDPOINT,
};

#[component]
pub fn Login() -> Element {
    let mut email = use_signal(|| "".to_string());
    let mut password = use_signal(|| "".to_string());
    let mut error_signal = use_signal(|| Option::<String>::None);

    let navigator = use_navigator();
    let error = error_signal();

    rsx! {
        div {
            class: "card",
            h5 {
                "Login"
            }
            form {
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
                        to: Route::CreateUser {}, "No account yet? Create one"
                    },
                    button {
                        r#type: "button",
                        onclick: move |_| async move {
                            let (email, password) = (email(), password());
                            let task = async {
                                let token = Api::new(API_ENDPOINT, None)
                                    .login(&email, &password)
                                    .await?;

                                LocalStorage.set(&token)
                            };

                            match task.await {
                                Ok(_) => {
                                    navigator.replace(Route::Questions {});
                                }
                                Err(e) => {
                                    error_signal.set(Some(e.to_string()));
                                }
                            }
                        },
                        "Login"
                    }
                }
            }
        }
    }
}
