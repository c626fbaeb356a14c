//! Route shells. The chat surface itself lives elsewhere in the
//! application; these pages mount the navigation bar over a placeholder.

use dioxus::prelude::*;

use crate::state::use_store;
use crate::ui::header::Header;
use crate::ui::title::PageTitle;
use crate::Route;

#[component]
pub fn Home() -> Element {
    let store = use_store();
    rsx! {
        PageTitle {}
        Header {}
        main { class: "page",
            if store.user().is_some() {
                p { class: "page-hint", "Select a chat to start messaging." }
            } else {
                p { class: "page-hint", "Sign in to start messaging." }
                Link { class: "page-link", to: Route::Login {}, "Go to sign in" }
            }
        }
    }
}

#[component]
pub fn Groups() -> Element {
    rsx! {
        PageTitle { title: "Manage Groups" }
        Header {}
        main { class: "page",
            p { class: "page-hint", "Groups you manage will appear here." }
        }
    }
}
