use dioxus::prelude::*;

use crate::{api::Api, route::Route};

#[component]
pub fn EditComment(questionid: i64, id: i64) -> Element {
    let comment = use_resource(use_reactive((&questionid, &id), |(questionid, id)| async move {
        Api::from_session().comment(questionid, id).await
    }));
    let mut content_signal = use_signal(|| Option::<String>::None);
    let mut error_signal = use_signal(|| Option::<String>::None);

    let navigator = use_navigator();
    let error = error_signal();

    // edits win over the fetched text once the user starts typing
    let content = match (content_signal(), &*comment.read_unchecked()) {
        (Some(edited), _) => edited,
        (None, Some(Ok(comment))) => comment.content.clone(),
        (None, Some(Err(e))) => {
            return rsx! {
                p {
                    class: "error",
                    "{e}"
                }
            }
        }
        (None, None) => {
            return rsx! {
                p {
                    class: "muted",
                    "Loading..."
                }
            }
        }
    };
    let save = content.clone();

    rsx! {
        div {
            class: "card wide",
            h5 {
                "Edit comment"
            }
            form {
                textarea {
                    id: "content",
                    rows: 6,
                    value: "{content}",
                    oninput: move |evt| {
                        content_signal.set(Some(evt.value()));
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
                        to: Route::Question { id: questionid }, "Cancel"
                    },
                    button {
                        r#type: "button",
                        onclick: move |_| {
                            let content = save.clone();

                            async move {
                                match Api::from_session().update_comment(questionid, id, &content).await {
                                    Ok(_) => {
                                        navigator.replace(Route::Question { id: questionid });
                                    }
                                    Err(e) => {
                                        error_signal.set(Some(e.to_string()));
                                    }
                                }
                            }
                        },
                        "Save"
                    }
                }
            }
        }
    }
}
