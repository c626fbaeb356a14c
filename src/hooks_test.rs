use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use super::*;

#[test]
fn image_mime_maps_known_extensions() {
    assert_eq!(image_mime("me.png"), Some("image/png"));
    assert_eq!(image_mime("me.jpg"), Some("image/jpeg"));
    assert_eq!(image_mime("me.JPEG"), Some("image/jpeg"));
    assert_eq!(image_mime("me.gif"), Some("image/gif"));
    assert_eq!(image_mime("me.webp"), Some("image/webp"));
}

#[test]
fn image_mime_rejects_everything_else() {
    assert_eq!(image_mime("me.pdf"), None);
    assert_eq!(image_mime("me.svg"), None);
    assert_eq!(image_mime("no_extension"), None);
    assert_eq!(image_mime(""), None);
}

#[test]
fn selection_rejects_non_image_files() {
    let err = AvatarSelection::new("cv.pdf".to_string(), vec![1, 2, 3]).unwrap_err();
    assert!(err.to_string().contains("PNG, JPEG, GIF or WebP"));
}

#[test]
fn selection_rejects_empty_and_oversized_files() {
    assert!(AvatarSelection::new("me.png".to_string(), vec![]).is_err());
    let oversized = vec![0u8; AVATAR_MAX_BYTES + 1];
    assert!(AvatarSelection::new("me.png".to_string(), oversized).is_err());
    let at_limit = vec![0u8; AVATAR_MAX_BYTES];
    assert!(AvatarSelection::new("me.png".to_string(), at_limit).is_ok());
}

#[test]
fn preview_url_round_trips_the_bytes() {
    let bytes = vec![137, 80, 78, 71, 13, 10, 26, 10];
    let selection = AvatarSelection::new("me.png".to_string(), bytes.clone()).unwrap();
    let url = selection.preview_url();
    let encoded = url.strip_prefix("data:image/png;base64,").unwrap();
    assert_eq!(STANDARD.decode(encoded).unwrap(), bytes);
}

#[test]
fn a_new_selection_replaces_the_old_preview() {
    let first = AvatarSelection::new("one.png".to_string(), vec![1]).unwrap();
    let second = AvatarSelection::new("two.jpg".to_string(), vec![2]).unwrap();
    let mut current = Some(first);
    let old_preview = current.as_ref().unwrap().preview_url();
    current = Some(second);
    let new_preview = current.as_ref().unwrap().preview_url();
    assert_ne!(old_preview, new_preview);
    assert!(new_preview.starts_with("data:image/jpeg;base64,"));
}
