//! Authentication screen.
//!
//! One form, two modes. The switch at the bottom flips between sign-in and
//! sign-up; sign-up additionally collects an avatar, a display name and a
//! bio. Submission goes to the matching endpoint and, on success, the
//! returned user lands in the shared store. Navigation away is driven by
//! whatever watches that store entry, not by this screen.

use dioxus::prelude::*;

use crate::api::{ApiClient, SignupForm};
use crate::hooks::{use_avatar, use_input, AvatarInput};
use crate::state::use_store;
use crate::toast::ToastKind;
use crate::ui::icons::{CameraIcon, EyeIcon, EyeOffIcon};
use crate::ui::title::PageTitle;
use crate::validators::username_error;

#[component]
pub fn Login() -> Element {
    let store = use_store();
    let api = use_context::<ApiClient>();

    let mut is_login = use_signal(|| true);
    let mut busy = use_signal(|| false);
    let mut show_password = use_signal(|| false);

    let name = use_input(None);
    let bio = use_input(None);
    let username = use_input(Some(username_error));
    let password = use_input(None);
    let avatar = use_avatar();

    // Mode-irrelevant state must not leak across the switch: a previously
    // picked avatar or a sign-up field error has no business on the sign-in
    // form, and vice versa after flipping back.
    let toggle_mode = move |_| {
        is_login.toggle();
        avatar.reset();
        name.clear_error();
        bio.clear_error();
    };

    let submit = move |event: Event<FormData>| {
        event.prevent_default();
        let api = api.clone();
        async move {
            if busy() {
                return;
            }
            // The inline error is already on screen; a request that the
            // server is guaranteed to reject is not worth sending.
            if username.error_text().is_some() {
                return;
            }
            busy.set(true);
            if is_login() {
                let toast = store.toast_loading("Logging in...");
                match api.login(&username.get(), &password.get()).await {
                    Ok(response) => {
                        store.user_exists(response.user);
                        store.toast_resolve(toast, ToastKind::Success, response.message);
                    }
                    Err(err) => {
                        store.toast_resolve(toast, ToastKind::Error, err.user_message());
                    }
                }
            } else {
                let form = SignupForm {
                    avatar: avatar.get(),
                    name: name.get(),
                    bio: bio.get(),
                    username: username.get(),
                    password: password.get(),
                };
                let toast = store.toast_loading("Signing up...");
                match api.sign_up(form).await {
                    Ok(response) => {
                        store.user_exists(response.user);
                        store.toast_resolve(toast, ToastKind::Success, response.message);
                    }
                    Err(err) => {
                        store.toast_resolve(toast, ToastKind::Error, err.user_message());
                    }
                }
            }
            busy.set(false);
        }
    };

    let title = if is_login() { "Welcome Back" } else { "Join Us" };
    let submit_label = if is_login() { "Sign In" } else { "Sign Up" };
    let switch_label = if is_login() {
        "Need an account? Sign up"
    } else {
        "Already have an account? Sign in"
    };
    let password_type = if show_password() { "text" } else { "password" };

    let page_title = if is_login() { "Login" } else { "Sign Up" };

    rsx! {
        PageTitle { title: "{page_title}" }
        div { class: "auth-wrap",
            div { class: "auth-card",
                h2 { class: "auth-title", "{title}" }
                form { novalidate: true, onsubmit: submit,
                    if !is_login() {
                        AvatarPicker { avatar }
                        TextField {
                            label: "Full Name",
                            value: name.get(),
                            oninput: move |e| name.oninput(e),
                        }
                        TextField {
                            label: "Bio",
                            value: bio.get(),
                            oninput: move |e| bio.oninput(e),
                        }
                    }
                    TextField {
                        label: "Username",
                        value: username.get(),
                        error: username.error_text().unwrap_or_default(),
                        required: true,
                        oninput: move |e| username.oninput(e),
                    }
                    div { class: "field",
                        label { class: "field-label", "Password" }
                        div { class: "field-row",
                            input {
                                r#type: password_type,
                                required: true,
                                value: password.get(),
                                oninput: move |e| password.oninput(e),
                            }
                            button {
                                r#type: "button",
                                class: "icon-btn",
                                title: "Toggle password visibility",
                                onclick: move |_| show_password.toggle(),
                                if show_password() {
                                    EyeOffIcon {}
                                } else {
                                    EyeIcon {}
                                }
                            }
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "submit-btn",
                        disabled: busy(),
                        "{submit_label}"
                    }
                }
                label { class: "mode-switch",
                    input {
                        r#type: "checkbox",
                        checked: !is_login(),
                        onchange: toggle_mode,
                    }
                    "{switch_label}"
                }
            }
        }
    }
}

#[component]
fn AvatarPicker(avatar: AvatarInput) -> Element {
    rsx! {
        div { class: "avatar-stack",
            if let Some(preview) = avatar.preview() {
                img { class: "avatar-preview", src: "{preview}" }
            } else {
                div { class: "avatar-preview" }
            }
            label { class: "avatar-edit", title: "Choose avatar",
                CameraIcon {}
                input {
                    r#type: "file",
                    accept: "image/*",
                    hidden: true,
                    onchange: move |e| avatar.onchange(e),
                }
            }
        }
        if let Some(error) = avatar.error_text() {
            p { class: "field-error avatar-error", "{error}" }
        }
    }
}

#[component]
fn TextField(
    label: String,
    value: String,
    #[props(default)] error: String,
    #[props(default)] required: bool,
    oninput: EventHandler<Event<FormData>>,
) -> Element {
    rsx! {
        div { class: "field",
            label { class: "field-label", "{label}" }
            input {
                r#type: "text",
                required,
                value: "{value}",
                oninput: move |e| oninput.call(e),
            }
            if !error.is_empty() {
                p { class: "field-error", "{error}" }
            }
        }
    }
}
