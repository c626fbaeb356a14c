use dioxus::prelude::*;

pub mod api;
pub mod config;
pub mod hooks;
pub mod lazy;
pub mod state;
pub mod toast;
mod ui;
pub mod validators;

use api::ApiClient;
use config::ServerConfig;
use state::Store;
use toast::Toaster;
use ui::auth::Login;
use ui::pages::{Groups, Home};

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let config = consume_context::<ServerConfig>();
    use_context_provider(|| ApiClient::new(config));
    Store::provide();
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/groups")]
    Groups {},
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

/// Shared layout component.
#[component]
fn Layout() -> Element {
    rsx! {
        Toaster {}
        Outlet::<Route> {}
    }
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    rsx! {
        "Could not find the page you are looking for."
        Link { to: Route::Home {}, "Go To Home" }
    }
}
