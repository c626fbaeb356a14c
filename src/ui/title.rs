//! Document title and description metadata.

use dioxus::prelude::*;

pub const APP_NAME: &str = "Ping!";
pub const APP_DESCRIPTION: &str =
    "Hello This is A App where you can contact to your loved ones";

/// Sets the document `<title>` and description `<meta>` tag. Both inputs
/// fall back to the fixed app defaults.
#[component]
pub fn PageTitle(
    #[props(default = APP_NAME.to_string())] title: String,
    #[props(default = APP_DESCRIPTION.to_string())] description: String,
) -> Element {
    rsx! {
        document::Title { "{title}" }
        document::Meta { name: "description", content: "{description}" }
    }
}
