use dioxus::prelude::*;

use crate::{
    api::{self, Api, Vote},
    components::avatar::{Avatar, Size},
    route::Route,
};

struct Thread {
    question: api::Question,
    author: Option<api::User>,
    comments: Vec<api::Comment>,
}

async fn load(id: i64) -> anyhow::Result<Thread> {
    let api = Api::from_session();
    let question = api.question(id).await?;
    // a deleted author should not hide the question
    let author = api.user(question.author).await.ok();
    let comments = api.comments(id).await?;

    Ok(Thread {
        question,
        author,
        comments,
    })
}

#[component]
pub fn Question(id: i64) -> Element {
    let mut thread = use_resource(use_reactive((&id,), |(id,)| load(id)));
    let mut error_signal = use_signal(|| Option::<String>::None);

    let error = error_signal();

    let vote = move |target: Option<i64>, vote: Vote| {
        spawn(async move {
            let api = Api::from_session();
            let res = match target {
                Some(comment) => api.vote_comment(id, comment, vote).await,
                None => api.vote_question(id, vote).await,
            };

            match res {
                Ok(_) => {
                    error_signal.set(None);
                    thread.restart();
                }
                Err(e) => error_signal.set(Some(e.to_string())),
            }
        });
    };

    let thread = thread.read_unchecked();
    let Thread {
        question,
        author,
        comments,
    } = match &*thread {
        Some(Ok(thread)) => thread,
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

    let asked = question
        .when
        .map(|x| x.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default();
    let comment_count = comments.len();

    rsx! {
        article {
            class: "question",
            div {
                class: "voting",
                button {
                    onclick: move |_| vote(None, Vote::Up),
                    "▲"
                }
                span {
                    "{question.votes}"
                }
                button {
                    onclick: move |_| vote(None, Vote::Down),
                    "▼"
                }
            }
            div {
                h1 {
                    "{question.title}"
                }
                p {
                    "{question.content}"
                }
                if let Some(author) = author {
                    div {
                        class: "author",
                        Avatar {
                            src: author.avatar.clone(),
                            nick: author.nick.clone(),
                            size: Size::Small
                        }
                        Link {
                            to: Route::Profile { email: author.email.clone() },
                            "{author.nick}"
                        }
                        span {
                            class: "muted",
                            "{asked}"
                        }
                    }
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
            class: "page-header",
            h2 {
                "{comment_count} comments"
            }
            Link {
                class: "button",
                to: Route::CreateComment { id },
                "Comment"
            }
        }
        ul {
            class: "list",
            for comment in comments.iter() {
                li {
                    key: "{comment.id}",
                    div {
                        class: "voting",
                        button {
                            onclick: {
                                let comment_id = comment.id;
                                move |_| vote(Some(comment_id), Vote::Up)
                            },
                            "▲"
                        }
                        span {
                            "{comment.votes}"
                        }
                        button {
                            onclick: {
                                let comment_id = comment.id;
                                move |_| vote(Some(comment_id), Vote::Down)
                            },
                            "▼"
                        }
                    }
                    p {
                        "{comment.content}"
                    }
                    Link {
                        class: "muted",
                        to: Route::EditComment { questionid: id, id: comment.id },
                        "edit"
                    }
                }
            }
        }
    }
}
