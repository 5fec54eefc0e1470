//! Pill badge component.

use board_core::BadgeTone;
use dioxus::prelude::*;

/// Rounded badge colored by tone.
#[component]
pub fn Badge(tone: BadgeTone, label: String, #[props(default)] class: String) -> Element {
    let tone_class = tone.classes();

    rsx! {
        span {
            class: "px-3 py-1 rounded-full text-xs font-medium {tone_class} {class}",
            {label}
        }
    }
}
