//! Overlay dialogs opened from the navigation bar.
//!
//! Deliberately thin panels: each one owns its local field state and closes
//! by clearing its store flag, nothing more.

use dioxus::prelude::*;

use crate::state::use_store;

#[component]
pub fn SearchDialog() -> Element {
    let store = use_store();
    let mut query = use_signal(String::new);
    rsx! {
        Modal { title: "Find People", on_close: move |_| store.close_search(),
            input {
                class: "dialog-input",
                placeholder: "Search users...",
                value: query(),
                oninput: move |e| query.set(e.value()),
            }
            if query().is_empty() {
                p { class: "dialog-hint", "Type a username to look for" }
            }
        }
    }
}

#[component]
pub fn NotificationsDialog() -> Element {
    let store = use_store();
    rsx! {
        Modal { title: "Notifications", on_close: move |_| store.close_notifications(),
            p { class: "dialog-hint", "You're all caught up" }
        }
    }
}

#[component]
pub fn NewGroupDialog() -> Element {
    let store = use_store();
    let mut group_name = use_signal(String::new);
    rsx! {
        Modal { title: "New Group", on_close: move |_| store.close_new_group(),
            input {
                class: "dialog-input",
                placeholder: "Group name",
                value: group_name(),
                oninput: move |e| group_name.set(e.value()),
            }
            p { class: "dialog-hint", "Pick members from your chats to fill the group" }
        }
    }
}

/// Centered modal over a click-to-close backdrop.
#[component]
fn Modal(title: String, on_close: Callback<(), ()>, children: Element) -> Element {
    rsx! {
        div { class: "dialog-backdrop", onclick: move |_| on_close(()),
            div {
                class: "dialog",
                onclick: move |e: Event<MouseData>| {
                    e.stop_propagation();
                },
                div { class: "dialog-head",
                    h3 { "{title}" }
                    button { class: "dialog-close", onclick: move |_| on_close(()), "×" }
                }
                {children}
            }
        }
    }
}
