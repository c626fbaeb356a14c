//! Shared client state.
//!
//! One [`AppState`] value holds everything that crosses component
//! boundaries: the authenticated user, the overlay flags the navigation bar
//! toggles, the notification counter and the toast lane. All transitions are
//! plain methods on `AppState`, so they can be exercised without a UI
//! runtime; [`Store`] is the `Copy` handle components reach through context.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::toast::{sleep, ToastId, ToastKind, ToastLane, TOAST_TTL};

/// The authenticated user object exactly as the server returned it. The UI
/// never looks inside; it only stores and clears it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct User(pub serde_json::Value);

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub user: Option<User>,
    pub notification_count: u32,
    pub is_search: bool,
    pub is_notification: bool,
    pub is_new_group: bool,
    pub is_mobile: bool,
    pub toasts: ToastLane,
}

impl AppState {
    pub fn user_exists(&mut self, user: User) {
        self.user = Some(user);
    }

    pub fn user_not_exists(&mut self) {
        self.user = None;
    }

    pub fn open_search(&mut self) {
        self.is_search = true;
    }

    pub fn close_search(&mut self) {
        self.is_search = false;
    }

    pub fn open_new_group(&mut self) {
        self.is_new_group = true;
    }

    pub fn close_new_group(&mut self) {
        self.is_new_group = false;
    }

    /// Opening the panel also clears the unread badge, in the same
    /// transition.
    pub fn open_notifications(&mut self) {
        self.is_notification = true;
        self.notification_count = 0;
    }

    pub fn close_notifications(&mut self) {
        self.is_notification = false;
    }

    pub fn set_mobile(&mut self, open: bool) {
        self.is_mobile = open;
    }

    /// Called by the message-arrival path when a request lands while the
    /// panel is closed.
    pub fn increment_notification(&mut self) {
        self.notification_count += 1;
    }

    pub fn reset_notification_count(&mut self) {
        self.notification_count = 0;
    }
}

/// Context handle over the shared state. Cheap to copy into event handlers.
#[derive(Clone, Copy)]
pub struct Store {
    state: Signal<AppState>,
}

pub fn use_store() -> Store {
    use_context()
}

impl Store {
    /// Installs a fresh store into context; called once from the app root.
    pub fn provide() -> Self {
        use_context_provider(|| Store {
            state: Signal::new(AppState::default()),
        })
    }

    pub fn user(&self) -> Option<User> {
        self.state.read().user.clone()
    }

    pub fn notification_count(&self) -> u32 {
        self.state.read().notification_count
    }

    pub fn is_search(&self) -> bool {
        self.state.read().is_search
    }

    pub fn is_notification(&self) -> bool {
        self.state.read().is_notification
    }

    pub fn is_new_group(&self) -> bool {
        self.state.read().is_new_group
    }

    pub fn is_mobile(&self) -> bool {
        self.state.read().is_mobile
    }

    pub fn toasts(&self) -> Vec<crate::toast::Toast> {
        self.state.read().toasts.toasts().to_vec()
    }

    pub fn user_exists(&self, user: User) {
        self.with_mut(|s| s.user_exists(user));
    }

    pub fn user_not_exists(&self) {
        self.with_mut(AppState::user_not_exists);
    }

    pub fn open_search(&self) {
        self.with_mut(AppState::open_search);
    }

    pub fn close_search(&self) {
        self.with_mut(AppState::close_search);
    }

    pub fn open_new_group(&self) {
        self.with_mut(AppState::open_new_group);
    }

    pub fn close_new_group(&self) {
        self.with_mut(AppState::close_new_group);
    }

    pub fn open_notifications(&self) {
        self.with_mut(AppState::open_notifications);
    }

    pub fn close_notifications(&self) {
        self.with_mut(AppState::close_notifications);
    }

    pub fn set_mobile(&self, open: bool) {
        self.with_mut(|s| s.set_mobile(open));
    }

    pub fn toast_success(&self, text: impl Into<String>) {
        let id = self.with_mut(|s| s.toasts.push(ToastKind::Success, text));
        self.expire_later(id);
    }

    pub fn toast_error(&self, text: impl Into<String>) {
        let id = self.with_mut(|s| s.toasts.push(ToastKind::Error, text));
        self.expire_later(id);
    }

    /// Pushes a toast that stays up until [`Store::toast_resolve`] turns it
    /// into an outcome.
    pub fn toast_loading(&self, text: impl Into<String>) -> ToastId {
        self.with_mut(|s| s.toasts.push(ToastKind::Loading, text))
    }

    pub fn toast_resolve(&self, id: ToastId, kind: ToastKind, text: impl Into<String>) {
        self.with_mut(|s| s.toasts.resolve(id, kind, text));
        self.expire_later(id);
    }

    pub fn toast_dismiss(&self, id: ToastId) {
        self.with_mut(|s| s.toasts.dismiss(id));
    }

    fn expire_later(&self, id: ToastId) {
        let mut state = self.state;
        spawn(async move {
            sleep(TOAST_TTL).await;
            state.with_mut(|s| s.toasts.dismiss(id));
        });
    }

    fn with_mut<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        let mut state = self.state;
        state.with_mut(f)
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
