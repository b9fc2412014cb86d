#![allow(non_snake_case)]

use dioxus::prelude::*;
use dioxus_logger::tracing::{info, Level};
use route::Route;

mod api;
mod auth;
mod components;
mod guard;
mod pages;
mod route;

pub static API_ENDPOINT: &str = match option_env!("API_ENDPOINT") {
    Some(x) => x,
    None => "http://localhost:8000",
};

/// Local storage key holding the session token.
pub static TOKEN_KEY: &str = "token";

fn main() {
    // Init logger
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("starting app, api endpoint {}", API_ENDPOINT);
    launch(App);
}

fn App() -> Element {
    rsx! {
        document::Stylesheet {
            href: asset!("/assets/main.css")
        }
        Router::<Route> {}
    }
}
