use dioxus::prelude::*;

#[component]
pub fn ModalBoxDescription(id: String, children: Element) -> Element {
    rsx! {
        div { id: "{id}", class: "px-6 pb-4 text-sm text-gray-400", {children} }
    }
}
