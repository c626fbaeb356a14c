//! Form input hooks.
//!
//! [`use_input`] backs a text field with value + error signals and runs its
//! validator on every change. [`use_avatar`] holds the selected avatar file
//! and derives the preview shown in the sign-up form; selecting a new file
//! replaces the previous selection wholesale, so the preview can never lag
//! behind what was picked.

use anyhow::bail;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::validators::Validator;

#[derive(Clone, Copy, PartialEq)]
pub struct InputState {
    pub value: Signal<String>,
    pub error: Signal<Option<String>>,
    validator: Option<Validator>,
}

pub fn use_input(validator: Option<Validator>) -> InputState {
    InputState {
        value: use_signal(String::new),
        error: use_signal(|| None),
        validator,
    }
}

impl InputState {
    pub fn oninput(mut self, event: Event<FormData>) {
        let value = event.value();
        if let Some(validate) = self.validator {
            self.error.set(validate(&value));
        }
        self.value.set(value);
    }

    pub fn get(&self) -> String {
        self.value.cloned()
    }

    pub fn error_text(&self) -> Option<String> {
        self.error.cloned()
    }

    pub fn clear_error(mut self) {
        self.error.set(None);
    }
}

pub const AVATAR_MAX_BYTES: usize = 5 * 1024 * 1024;

/// A validated avatar pick: the raw bytes plus the metadata the multipart
/// upload needs.
#[derive(Clone, Debug, PartialEq)]
pub struct AvatarSelection {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl AvatarSelection {
    pub fn new(file_name: String, bytes: Vec<u8>) -> anyhow::Result<Self> {
        let Some(mime) = image_mime(&file_name) else {
            bail!("Avatar must be a PNG, JPEG, GIF or WebP image");
        };
        if bytes.is_empty() {
            bail!("The selected file is empty");
        }
        if bytes.len() > AVATAR_MAX_BYTES {
            bail!("Avatar must be smaller than 5 MB");
        }
        Ok(Self {
            file_name,
            mime,
            bytes,
        })
    }

    /// Data-URL preview of the selection. Self-contained, so no handle to
    /// the underlying file sticks around after a re-selection.
    pub fn preview_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }
}

/// MIME type for the avatar upload, keyed on the file extension.
pub fn image_mime(file_name: &str) -> Option<&'static str> {
    let (_, extension) = file_name.rsplit_once('.')?;
    match extension.to_ascii_lowercase().as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct AvatarInput {
    pub selection: Signal<Option<AvatarSelection>>,
    pub error: Signal<Option<String>>,
}

pub fn use_avatar() -> AvatarInput {
    AvatarInput {
        selection: use_signal(|| None),
        error: use_signal(|| None),
    }
}

impl AvatarInput {
    /// Reads the picked file and swaps it in as the current selection. A
    /// file that fails validation sets the inline error and leaves the
    /// previous selection (and its preview) untouched.
    pub async fn onchange(mut self, event: Event<FormData>) {
        let Some(file) = event.files().into_iter().next() else {
            return;
        };
        let file_name = file.name();
        let bytes = match file.read_bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(err) => {
                warn!("could not read avatar file: {err:?}");
                self.error.set(Some("Could not read the selected file".to_string()));
                return;
            }
        };
        match AvatarSelection::new(file_name, bytes) {
            Ok(selection) => {
                self.error.set(None);
                self.selection.set(Some(selection));
            }
            Err(err) => self.error.set(Some(err.to_string())),
        }
    }

    pub fn get(&self) -> Option<AvatarSelection> {
        self.selection.cloned()
    }

    pub fn preview(&self) -> Option<String> {
        self.selection.read().as_ref().map(AvatarSelection::preview_url)
    }

    pub fn error_text(&self) -> Option<String> {
        self.error.cloned()
    }

    pub fn reset(mut self) {
        self.selection.set(None);
        self.error.set(None);
    }
}

#[cfg(test)]
#[path = "hooks_test.rs"]
mod tests;
