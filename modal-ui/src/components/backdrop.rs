//! Full-viewport backdrop behind modal content

use dioxus::prelude::*;

#[component]
pub fn Backdrop(#[props(default)] class: Option<String>, children: Element) -> Element {
    let extra = class.unwrap_or_default();

    rsx! {
        div { class: "fixed inset-0 z-[3000] bg-black/50 {extra}", {children} }
    }
}
