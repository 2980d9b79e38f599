use dioxus::prelude::*;

#[component]
pub fn ModalBoxFooter(#[props(default)] is_right_aligned: bool, children: Element) -> Element {
    let justify = if is_right_aligned {
        "justify-end"
    } else {
        "justify-start"
    };

    rsx! {
        footer { class: "flex gap-3 px-6 py-4 border-t border-gray-700 {justify}", {children} }
    }
}
