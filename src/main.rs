use dioxus::{logger::tracing::Level, prelude::*};

use ping_chat::{config::ServerConfig, App};

fn main() {
    dioxus::logger::init(Level::INFO).unwrap();
    LaunchBuilder::new()
        .with_context(ServerConfig::from_env())
        .launch(App)
}
