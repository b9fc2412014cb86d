use anyhow::{anyhow, bail, Context};
use chrono::{DateTime, Utc};
use dioxus_logger::tracing::warn;
use reqwest::{Method, RequestBuilder};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{
    auth::{LocalStorage, TokenStore},
    API_ENDPOINT,
};

const TITLE_MIN_SIZE: usize = 30;
const TITLE_MAX_SIZE: usize = 140;
const CONTENT_MAX_SIZE: usize = 2000;
const NICK_MAX_SIZE: usize = 16;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub since: Option<DateTime<Utc>>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub nick: String,
    #[serde(default)]
    pub avatar: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub email: String,
    pub nick: String,
    pub password: String,
}

impl NewUser {
    pub fn check(&self) -> anyhow::Result<()> {
        if self.email.is_empty() || self.password.is_empty() {
            bail!("email and password are required");
        }
        if self.nick.is_empty()
            || self.nick.len() > NICK_MAX_SIZE
            || !self.nick.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            bail!("nick must be up to {NICK_MAX_SIZE} letters, digits or underscores");
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Question {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub votes: i64,
    #[serde(default)]
    pub author: i64,
    #[serde(default)]
    pub when: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_edit: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewQuestion {
    pub title: String,
    pub content: String,
}

impl NewQuestion {
    pub fn check(&self) -> anyhow::Result<()> {
        if !(TITLE_MIN_SIZE..=TITLE_MAX_SIZE).contains(&self.title.len()) {
            bail!("title must be between {TITLE_MIN_SIZE} and {TITLE_MAX_SIZE} characters");
        }

        check_content(&self.content)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Comment {
    pub id: i64,
    #[serde(default)]
    pub question: i64,
    #[serde(default)]
    pub author: i64,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub votes: i64,
    #[serde(default)]
    pub when: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_edit: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
struct CommentBody<'a> {
    content: &'a str,
}

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

pub fn check_content(content: &str) -> anyhow::Result<()> {
    if content.len() > CONTENT_MAX_SIZE {
        bail!("content must be below {CONTENT_MAX_SIZE} characters");
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Vote {
    Up,
    Down,
}

impl Vote {
    fn method(self) -> Method {
        match self {
            Vote::Up => Method::PUT,
            Vote::Down => Method::DELETE,
        }
    }
}

/// Wrapper around every response body.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    result: Option<T>,
    #[serde(default)]
    error: Option<String>,
}

fn parse<T: DeserializeOwned>(body: &str) -> anyhow::Result<Option<T>> {
    let envelope = serde_json::from_str::<Envelope<T>>(body).context("malformed response")?;

    match envelope.error {
        Some(e) => Err(anyhow!(e)),
        None => Ok(envelope.result),
    }
}

#[derive(Clone)]
pub struct Api {
    client: reqwest::Client,
    base: String,
    token: Option<String>,
}

impl Api {
    pub fn new(base: &str, token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base.trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Client for the configured endpoint, authenticated with the stored token.
    pub fn from_session() -> Self {
        Self::new(API_ENDPOINT, LocalStorage.get())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let request = self.client.request(method, self.url(path));

        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(request: RequestBuilder) -> anyhow::Result<Option<T>> {
        let res = request.send().await.context("request failed")?;
        let status = res.status();
        let body = res.text().await?;

        parse(&body).map_err(|e| {
            warn!("api error ({}): {}", status, e);
            e
        })
    }

    async fn fetch<T: DeserializeOwned>(request: RequestBuilder) -> anyhow::Result<T> {
        Self::send(request)
            .await?
            .ok_or(anyhow!("empty response"))
    }

    pub async fn login(&self, email: &str, password: &str) -> anyhow::Result<String> {
        Self::fetch(
            self.request(Method::POST, "/login")
                .json(&Credentials { email, password }),
        )
        .await
    }

    pub async fn create_user(&self, user: &NewUser) -> anyhow::Result<User> {
        user.check()?;

        Self::fetch(self.request(Method::POST, "/user").json(user)).await
    }

    pub async fn user(&self, id: i64) -> anyhow::Result<User> {
        Self::fetch(self.request(Method::GET, &format!("/user/{}", id))).await
    }

    pub async fn user_by_email(&self, email: &str) -> anyhow::Result<User> {
        Self::fetch(self.request(Method::GET, &format!("/user/{}", email))).await
    }

    pub async fn questions(&self) -> anyhow::Result<Vec<Question>> {
        Ok(Self::send(self.request(Method::GET, "/question"))
            .await?
            .unwrap_or_default())
    }

    pub async fn question(&self, id: i64) -> anyhow::Result<Question> {
        Self::fetch(self.request(Method::GET, &format!("/question/{}", id))).await
    }

    pub async fn create_question(&self, question: &NewQuestion) -> anyhow::Result<Question> {
        question.check()?;

        Self::fetch(self.request(Method::POST, "/question").json(question)).await
    }

    pub async fn vote_question(&self, id: i64, vote: Vote) -> anyhow::Result<()> {
        Self::send::<serde_json::Value>(
            self.request(vote.method(), &format!("/question/{}/vote", id)),
        )
        .await
        .map(|_| ())
    }

    pub async fn comments(&self, question: i64) -> anyhow::Result<Vec<Comment>> {
        Ok(Self::send(
            self.request(Method::GET, &format!("/question/{}/comments", question)),
        )
        .await?
        .unwrap_or_default())
    }

    pub async fn comment(&self, question: i64, id: i64) -> anyhow::Result<Comment> {
        Self::fetch(self.request(
            Method::GET,
            &format!("/question/{}/comments/{}", question, id),
        ))
        .await
    }

    pub async fn create_comment(&self, question: i64, content: &str) -> anyhow::Result<Comment> {
        check_content(content)?;

        Self::fetch(
            self.request(Method::POST, &format!("/question/{}/comments", question))
                .json(&CommentBody { content }),
        )
        .await
    }

    pub async fn update_comment(
        &self,
        question: i64,
        id: i64,
        content: &str,
    ) -> anyhow::Result<Comment> {
        check_content(content)?;

        Self::fetch(
            self.request(
                Method::PUT,
                &format!("/question/{}/comments/{}", question, id),
            )
            .json(&CommentBody { content }),
        )
        .await
    }

    pub async fn vote_comment(&self, question: i64, id: i64, vote: Vote) -> anyhow::Result<()> {
        Self::send::<serde_json::Value>(self.request(
            vote.method(),
            &format!("/question/{}/comments/{}/vote", question, id),
        ))
        .await
        .map(|_| ())
    }
}
