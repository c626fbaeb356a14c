//! Top navigation bar.
//!
//! Five icon actions: search, new group, manage groups, notifications and
//! logout. The overlay dialogs behind the first, second and fourth render
//! only while their store flag is set, behind the deferred loader.

use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::lazy::Deferred;
use crate::state::use_store;
use crate::ui::dialogs::{NewGroupDialog, NotificationsDialog, SearchDialog};
use crate::ui::icons::{AddIcon, BellIcon, GroupIcon, LogoutIcon, MenuIcon, SearchIcon};
use crate::Route;

#[component]
pub fn Header() -> Element {
    let store = use_store();
    let api = use_context::<ApiClient>();
    let nav = navigator();

    // A failed logout keeps the user signed in client-side; they can retry
    // from the same button.
    let logout = move |_: ()| {
        let api = api.clone();
        async move {
            match api.logout().await {
                Ok(response) => {
                    store.user_not_exists();
                    store.toast_success(response.message);
                }
                Err(err) => store.toast_error(err.user_message()),
            }
        }
    };

    rsx! {
        header { class: "app-bar",
            button {
                class: "icon-btn mobile-only",
                title: "Menu",
                onclick: move |_| store.set_mobile(true),
                MenuIcon {}
            }
            div { class: "app-bar-title", "Ping!" }
            div { class: "app-bar-spacer" }
            nav { class: "app-bar-actions",
                IconBtn {
                    label: "Search",
                    onclick: move |_| store.open_search(),
                    SearchIcon {}
                }
                IconBtn {
                    label: "New Group",
                    onclick: move |_| store.open_new_group(),
                    AddIcon {}
                }
                IconBtn {
                    label: "Manage Groups",
                    onclick: move |_| {
                        nav.push(Route::Groups {});
                    },
                    GroupIcon {}
                }
                IconBtn {
                    label: "Notifications",
                    value: store.notification_count(),
                    onclick: move |_| store.open_notifications(),
                    BellIcon {}
                }
                IconBtn { label: "Logout", onclick: logout, LogoutIcon {} }
            }
        }

        if store.is_search() {
            Deferred { name: "search", SearchDialog {} }
        }

        if store.is_notification() {
            Deferred { name: "notifications", NotificationsDialog {} }
        }

        if store.is_new_group() {
            Deferred { name: "new-group", NewGroupDialog {} }
        }
    }
}

/// Icon button with a tooltip and an optional unread badge.
#[component]
fn IconBtn(
    label: String,
    #[props(default)] value: u32,
    onclick: Callback<(), ()>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "icon-btn",
            title: "{label}",
            onclick: move |_| onclick(()),
            {children}
            if value > 0 {
                span { class: "icon-badge", "{value}" }
            }
        }
    }
}
