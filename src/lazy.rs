//! On-demand overlay mounting.
//!
//! The navigation bar's dialogs are heavy enough that they should not mount
//! as part of the interaction that opens them. [`Deferred`] renders a
//! blocking backdrop for the first frame while its loader completes, then
//! marks the overlay as loaded in a process-wide registry so every later
//! open mounts the cached instance immediately.

use std::collections::HashSet;

use dioxus::prelude::*;

static LOADED_OVERLAYS: GlobalSignal<HashSet<&'static str>> = Signal::global(HashSet::new);

#[component]
pub fn Deferred(name: &'static str, children: Element) -> Element {
    let ready = LOADED_OVERLAYS.read().contains(name);
    use_future(move || async move {
        if !LOADED_OVERLAYS.peek().contains(name) {
            LOADED_OVERLAYS.write().insert(name);
        }
    });
    if ready {
        rsx! {
            {children}
        }
    } else {
        rsx! {
            Backdrop {}
        }
    }
}

/// Blocking placeholder shown while an overlay loads.
#[component]
pub fn Backdrop() -> Element {
    rsx! {
        div { class: "backdrop" }
    }
}
