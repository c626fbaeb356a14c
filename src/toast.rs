//! Transient toast notifications.
//!
//! Success and error toasts auto-dismiss after a short delay; a loading
//! toast stays up until it is resolved into an outcome with the id handed
//! out when it was pushed.

use std::time::Duration;

use dioxus::prelude::*;

use crate::state::use_store;

pub const TOAST_TTL: Duration = Duration::from_secs(4);

pub type ToastId = u64;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
    Loading,
}

impl ToastKind {
    fn css_class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
            ToastKind::Loading => "toast-loading",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub text: String,
}

/// Ordered set of live toasts. Pure state; the [`Toaster`] component and the
/// store's timer wiring live elsewhere so this stays directly testable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastLane {
    next_id: ToastId,
    toasts: Vec<Toast>,
}

impl ToastLane {
    pub fn push(&mut self, kind: ToastKind, text: impl Into<String>) -> ToastId {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            text: text.into(),
        });
        id
    }

    /// Replaces the toast with `id` in place, keeping its slot in the lane.
    /// A no-op when the toast was already dismissed.
    pub fn resolve(&mut self, id: ToastId, kind: ToastKind, text: impl Into<String>) {
        if let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) {
            toast.kind = kind;
            toast.text = text.into();
        }
    }

    pub fn dismiss(&mut self, id: ToastId) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Renders the toast lane. Mounted once, in the shared layout.
#[component]
pub fn Toaster() -> Element {
    let store = use_store();
    rsx! {
        div { class: "toast-lane",
            for toast in store.toasts() {
                ToastEl { key: "{toast.id}", toast }
            }
        }
    }
}

#[component]
fn ToastEl(toast: Toast) -> Element {
    let store = use_store();
    let id = toast.id;
    let kind_class = toast.kind.css_class();
    rsx! {
        div { class: "toast {kind_class}",
            span { "{toast.text}" }
            if toast.kind != ToastKind::Loading {
                button {
                    class: "toast-dismiss",
                    onclick: move |_| store.toast_dismiss(id),
                    "×"
                }
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(target_arch = "wasm32")]
pub(crate) async fn sleep(duration: Duration) {
    gloo_timers::future::TimeoutFuture::new(duration.as_millis() as u32).await;
}

#[cfg(test)]
#[path = "toast_test.rs"]
mod tests;
