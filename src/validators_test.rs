use super::*;

#[test]
fn accepts_plain_usernames() {
    assert_eq!(username_error("alice"), None);
    assert_eq!(username_error("alice_42"), None);
    assert_eq!(username_error("A1_b2"), None);
}

#[test]
fn empty_value_produces_no_error() {
    assert_eq!(username_error(""), None);
}

#[test]
fn rejects_forbidden_characters() {
    assert!(username_error("alice smith").is_some());
    assert!(username_error("alice!").is_some());
    assert!(username_error("alícia").is_some());
    assert!(username_error("a-b").is_some());
}

#[test]
fn rejects_over_long_usernames() {
    let long = "a".repeat(USERNAME_MAX + 1);
    assert!(username_error(&long).is_some());
    let max = "a".repeat(USERNAME_MAX);
    assert_eq!(username_error(&max), None);
}

#[test]
fn error_text_matches_rule() {
    let error = username_error("no spaces").unwrap();
    assert!(error.contains("letters, numbers and underscores"));
}
