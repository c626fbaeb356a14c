//! Inline Lucide SVG icons used by the navigation bar and the forms.

use dioxus::prelude::*;

fn icon(body: Element) -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {body}
        }
    }
}

#[component]
pub fn SearchIcon() -> Element {
    icon(rsx! {
        circle { cx: "11", cy: "11", r: "8" }
        path { d: "m21 21-4.3-4.3" }
    })
}

#[component]
pub fn AddIcon() -> Element {
    icon(rsx! {
        path { d: "M5 12h14" }
        path { d: "M12 5v14" }
    })
}

#[component]
pub fn GroupIcon() -> Element {
    icon(rsx! {
        path { d: "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" }
        circle { cx: "9", cy: "7", r: "4" }
        path { d: "M22 21v-2a4 4 0 0 0-3-3.87" }
        path { d: "M16 3.13a4 4 0 0 1 0 7.75" }
    })
}

#[component]
pub fn BellIcon() -> Element {
    icon(rsx! {
        path { d: "M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9" }
        path { d: "M10.3 21a1.94 1.94 0 0 0 3.4 0" }
    })
}

#[component]
pub fn LogoutIcon() -> Element {
    icon(rsx! {
        path { d: "M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4" }
        path { d: "M16 17l5-5-5-5" }
        path { d: "M21 12H9" }
    })
}

#[component]
pub fn MenuIcon() -> Element {
    icon(rsx! {
        path { d: "M4 6h16" }
        path { d: "M4 12h16" }
        path { d: "M4 18h16" }
    })
}

#[component]
pub fn CameraIcon() -> Element {
    icon(rsx! {
        path { d: "M14.5 4h-5L7 7H4a2 2 0 0 0-2 2v9a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V9a2 2 0 0 0-2-2h-3l-2.5-3z" }
        circle { cx: "12", cy: "13", r: "3" }
    })
}

#[component]
pub fn EyeIcon() -> Element {
    icon(rsx! {
        path { d: "M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7z" }
        circle { cx: "12", cy: "12", r: "3" }
    })
}

#[component]
pub fn EyeOffIcon() -> Element {
    icon(rsx! {
        path { d: "M9.88 9.88a3 3 0 1 0 4.24 4.24" }
        path { d: "M10.73 5.08A10.43 10.43 0 0 1 12 5c7 0 10 7 10 7a13.16 13.16 0 0 1-1.67 2.68" }
        path { d: "M6.61 6.61A13.526 13.526 0 0 0 2 12s3 7 10 7a9.74 9.74 0 0 0 5.39-1.61" }
        path { d: "m2 2 20 20" }
    })
}
