use dioxus::prelude::*;

use crate::{api::Api, route::Route};

#[component]
pub fn CreateComment(id: i64) -> Element {
    let mut content = use_signal(|| "".to_string());
    let mut error_signal = use_signal(|| Option::<String>::None);

    let navigator = use_navigator();
    let error = error_signal();

    rsx! {
        div {
            class: "card wide",
            h5 {
                "Add a comment"
            }
            form {
                textarea {
                    id: "content",
                    rows: 6,
                    required: 1,
                    onchange: move |evt| {
                        content.set(evt.value());
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
                        to: Route::Question { id }, "Back to question"
                    },
                    button {
                        r#type: "button",
                        onclick: move |_| async move {
                            match Api::from_session().create_comment(id, &content()).await {
                                Ok(_) => {
                                    navigator.replace(Route::Question { id });
                                }
                                Err(e) => {
                                    error_signal.set(Some(e.to_string()));
                                }
                            }
                        },
                        "Comment"
                    }
                }
            }
        }
    }
}
