use serde_json::json;

use super::*;
use crate::api::AuthResponse;

#[test]
fn opening_notifications_resets_the_counter() {
    let mut state = AppState::default();
    state.increment_notification();
    state.increment_notification();
    assert_eq!(state.notification_count, 2);

    state.open_notifications();
    assert!(state.is_notification);
    assert_eq!(state.notification_count, 0);
}

#[test]
fn overlay_flags_toggle_independently() {
    let mut state = AppState::default();
    state.open_search();
    state.open_new_group();
    assert!(state.is_search);
    assert!(state.is_new_group);
    assert!(!state.is_notification);

    state.close_search();
    assert!(!state.is_search);
    assert!(state.is_new_group);
}

#[test]
fn login_success_stores_the_returned_user() {
    // The exact payload shape the server answers with.
    let body = json!({
        "message": "Welcome",
        "user": { "id": 1, "username": "alice" }
    });
    let response: AuthResponse = serde_json::from_value(body).unwrap();
    assert_eq!(response.message, "Welcome");

    let mut state = AppState::default();
    state.user_exists(response.user);
    assert_eq!(
        state.user,
        Some(User(json!({ "id": 1, "username": "alice" })))
    );
}

#[test]
fn logout_clears_the_user() {
    let mut state = AppState::default();
    state.user_exists(User(json!({ "id": 7 })));
    state.user_not_exists();
    assert_eq!(state.user, None);
}

#[test]
fn user_survives_unrelated_transitions() {
    // A failed logout never touches the store, so only the overlay and
    // notification transitions run; none of them may clear the user.
    let mut state = AppState::default();
    state.user_exists(User(json!({ "id": 7 })));

    state.open_search();
    state.close_search();
    state.open_notifications();
    state.close_notifications();
    state.set_mobile(true);
    state.increment_notification();
    state.reset_notification_count();

    assert_eq!(state.user, Some(User(json!({ "id": 7 }))));
}
