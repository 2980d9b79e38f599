//! Scrollable body region of the modal box

use dioxus::prelude::*;

/// Body region. Extra attributes from the caller are spread onto the element.
#[component]
pub fn ModalBoxBody(
    #[props(default)] id: Option<String>,
    #[props(default)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        div {
            id: id.as_deref(),
            class: "px-6 pb-6 overflow-y-auto flex-1 text-gray-300",
            ..attributes,
            {children}
        }
    }
}
