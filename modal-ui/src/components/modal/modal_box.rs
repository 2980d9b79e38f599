//! Bounded dialog container

use crate::display_types::{ModalVariant, ModalWidth};
use dioxus::prelude::*;

/// The dialog box itself. `described_by` points assistive tech at the body
/// or description element.
#[component]
pub fn ModalBox(
    title: String,
    described_by: String,
    #[props(default)] variant: ModalVariant,
    #[props(default)] class: Option<String>,
    #[props(default)] width: ModalWidth,
    children: Element,
) -> Element {
    let extra = class.unwrap_or_default();
    let variant_class = variant.as_class();

    rsx! {
        div {
            class: "relative flex flex-col w-full mx-4 max-h-[80vh] bg-gray-800 rounded-lg shadow-xl {variant_class} {extra}",
            style: width.style(),
            role: "dialog",
            aria_modal: "true",
            aria_label: "{title}",
            aria_describedby: "{described_by}",
            {children}
        }
    }
}
