use serde_json::json;

use super::*;

#[test]
fn login_request_serializes_the_exact_fields() {
    let body = serde_json::to_value(LoginRequest {
        username: "alice",
        password: "secret",
    })
    .unwrap();
    assert_eq!(body, json!({ "username": "alice", "password": "secret" }));
}

#[test]
fn auth_response_decodes_message_and_user() {
    let response: AuthResponse = serde_json::from_value(json!({
        "message": "Welcome",
        "user": { "id": 1, "username": "alice" }
    }))
    .unwrap();
    assert_eq!(response.message, "Welcome");
    assert_eq!(response.user.0["username"], "alice");
}

#[test]
fn message_response_decodes() {
    let response: MessageResponse =
        serde_json::from_value(json!({ "message": "Logged out successfully" })).unwrap();
    assert_eq!(response.message, "Logged out successfully");
}

#[test]
fn server_error_prefers_the_server_message() {
    let err = ApiError::Server {
        status: StatusCode::UNAUTHORIZED,
        message: Some("Invalid credentials".to_string()),
    };
    assert_eq!(err.user_message(), "Invalid credentials");
}

#[test]
fn server_error_without_body_falls_back() {
    let err = ApiError::Server {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        message: None,
    };
    assert_eq!(err.user_message(), GENERIC_ERROR);
}

#[test]
fn signup_form_builds_multipart_without_avatar() {
    let form = SignupForm {
        avatar: None,
        name: "Alice".to_string(),
        bio: "hi".to_string(),
        username: "alice".to_string(),
        password: "secret".to_string(),
    };
    assert!(form.into_multipart().is_ok());
}

#[test]
fn signup_form_builds_multipart_with_avatar() {
    let avatar = crate::hooks::AvatarSelection::new("me.png".to_string(), vec![1, 2, 3]).unwrap();
    let form = SignupForm {
        avatar: Some(avatar),
        ..Default::default()
    };
    assert!(form.into_multipart().is_ok());
}
