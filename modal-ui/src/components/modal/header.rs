//! Standard text header of the modal box

use dioxus::prelude::*;

/// Title header; a hidden title stays readable by screen readers
#[component]
pub fn ModalBoxHeader(#[props(default)] hide_title: bool, children: Element) -> Element {
    let visibility = if hide_title { " sr-only" } else { "" };

    rsx! {
        h1 { class: "px-6 pt-6 pb-4 text-xl font-bold text-white{visibility}", {children} }
    }
}
