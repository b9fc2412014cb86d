use dioxus::prelude::*;

use crate::{
    api::{Api, NewQuestion},
    route::Route,
};

#[component]
pub fn CreateQuestion() -> Element {
    let mut title = use_signal(|| "".to_string());
    let mut content = use_signal(|| "".to_string());
    let mut error_signal = use_signal(|| Option::<String>::None);

    let navigator = use_navigator();
    let error = error_signal();

    rsx! {
        div {
            class: "card wide",
            h5 {
                "Ask a question"
            }
            form {
                div {
                    label {
                        r#for: "title",
                        "Title"
                    }
                    input {
                        r#type: "text",
                        id: "title",
                        required: 1,
                        onchange: move |evt| {
                            title.set(evt.value());
                        }
                    }
                }
                div {
                    label {
                        r#for: "content",
                        "Details"
                    }
                    textarea {
                        id: "content",
                        rows: 8,
                        onchange: move |evt| {
                            content.set(evt.value());
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
                        to: Route::Questions {}, "Cancel"
                    },
                    button {
                        r#type: "button",
                        onclick: move |_| async move {
                            let question = NewQuestion {
                                title: title(),
                                content: content(),
                            };

                            match Api::from_session().create_question(&question).await {
                                Ok(created) => {
                                    navigator.replace(Route::Question { id: created.id });
                                }
                                Err(e) => {
                                    error_signal.set(Some(e.to_string()));
                                }
                            }
                        },
                        "Post question"
                    }
                }
            }
        }
    }
}
