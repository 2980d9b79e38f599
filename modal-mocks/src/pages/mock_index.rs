//! Mock index and page wrappers

use crate::mocks::ModalMock;
use crate::Route;
use dioxus::prelude::*;
use modal_ui::{ModalBox, ModalBoxBody, ModalBoxFooter, ModalBoxHeader, ModalVariant};

#[component]
pub fn MockIndex() -> Element {
    rsx! {
        div { class: "min-h-screen bg-gray-900 text-white p-8",
            h1 { class: "text-2xl font-bold mb-6", "modal mocks" }

            h2 { class: "text-lg font-semibold text-gray-400 mb-3", "Components" }
            div { class: "grid grid-cols-2 gap-4",
                SpecimenCard {
                    title: "ModalContent",
                    to: Route::MockModal { state: None },
                    // Static box only; the full modal needs the whole viewport
                    ModalBox {
                        title: "Specimen".to_string(),
                        described_by: "specimen-body".to_string(),
                        variant: ModalVariant::Small,
                        ModalBoxHeader { "Delete playlist?" }
                        ModalBoxBody { id: Some("specimen-body".to_string()),
                            "This cannot be undone."
                        }
                        ModalBoxFooter { is_right_aligned: true,
                            span { class: "text-sm text-gray-400", "Cancel · Delete" }
                        }
                    }
                }
            }
        }
    }
}

/// A card showing a specimen with a link to the full mock page
#[component]
fn SpecimenCard(title: &'static str, to: Route, children: Element) -> Element {
    rsx! {
        Link {
            to,
            class: "block bg-gray-950 rounded-lg p-4 hover:bg-gray-900 transition-colors border border-gray-800",
            h3 { class: "text-sm font-medium text-gray-300 mb-3", "{title}" }
            div { class: "pointer-events-none", {children} }
        }
    }
}

#[component]
pub fn MockModal(state: Option<String>) -> Element {
    rsx! {
        ModalMock { initial_state: state }
    }
}
