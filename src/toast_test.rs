use super::*;

#[test]
fn push_hands_out_distinct_ids_in_order() {
    let mut lane = ToastLane::default();
    let a = lane.push(ToastKind::Success, "first");
    let b = lane.push(ToastKind::Error, "second");
    assert_ne!(a, b);
    let texts: Vec<&str> = lane.toasts().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["first", "second"]);
}

#[test]
fn resolve_replaces_in_place() {
    let mut lane = ToastLane::default();
    let before = lane.push(ToastKind::Success, "kept");
    let loading = lane.push(ToastKind::Loading, "Logging in...");
    lane.resolve(loading, ToastKind::Success, "Welcome");
    assert_eq!(lane.toasts().len(), 2);
    let resolved = &lane.toasts()[1];
    assert_eq!(resolved.id, loading);
    assert_eq!(resolved.kind, ToastKind::Success);
    assert_eq!(resolved.text, "Welcome");
    assert_eq!(lane.toasts()[0].id, before);
}

#[test]
fn resolve_after_dismiss_is_a_no_op() {
    let mut lane = ToastLane::default();
    let id = lane.push(ToastKind::Loading, "Signing up...");
    lane.dismiss(id);
    lane.resolve(id, ToastKind::Error, "too late");
    assert!(lane.toasts().is_empty());
}

#[test]
fn dismiss_unknown_id_is_a_no_op() {
    let mut lane = ToastLane::default();
    lane.push(ToastKind::Success, "still here");
    lane.dismiss(999);
    assert_eq!(lane.toasts().len(), 1);
}

#[test]
fn dismiss_removes_only_the_target() {
    let mut lane = ToastLane::default();
    let a = lane.push(ToastKind::Success, "a");
    let b = lane.push(ToastKind::Error, "b");
    lane.dismiss(a);
    let ids: Vec<ToastId> = lane.toasts().iter().map(|t| t.id).collect();
    assert_eq!(ids, [b]);
}
