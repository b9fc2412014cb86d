use dioxus::prelude::*;

use crate::{api::Api, route::Route};

#[component]
pub fn Questions() -> Element {
    let questions = use_resource(|| async move { Api::from_session().questions().await });

    rsx! {
        div {
            class: "page-header",
            h1 {
                "Questions"
            }
            Link {
                class: "button",
                to: Route::CreateQuestion {},
                "Ask a question"
            }
        }
        {match &*questions.read_unchecked() {
            Some(Ok(list)) if list.is_empty() => rsx! {
                p {
                    class: "muted",
                    "No questions yet."
                }
            },
            Some(Ok(list)) => rsx! {
                ul {
                    class: "list",
                    for question in list.iter() {
                        li {
                            key: "{question.id}",
                            span {
                                class: "votes",
                                "{question.votes}"
                            }
                            Link {
                                to: Route::Question { id: question.id },
                                "{question.title}"
                            }
                        }
                    }
                }
            },
            Some(Err(e)) => rsx! {
                p {
                    class: "error",
                    "{e}"
                }
            },
            None => rsx! {
                p {
                    class: "muted",
                    "Loading..."
                }
            },
        }}
    }
}
