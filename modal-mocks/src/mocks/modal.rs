//! ModalContent mock

use super::framework::{ControlRegistryBuilder, MockPanel, Preset};
use crate::Route;
use dioxus::prelude::*;
use modal_ui::{Button, ButtonVariant, ModalContent, ModalVariant, ModalWidth};

fn variant_from_control(value: &str) -> ModalVariant {
    match value {
        "small" => ModalVariant::Small,
        "large" => ModalVariant::Large,
        _ => ModalVariant::Default,
    }
}

fn width_from_control(value: &str) -> ModalWidth {
    match value {
        "unset" => ModalWidth::Unset,
        _ => match value.parse::<i32>() {
            Ok(px) => ModalWidth::from(px),
            Err(_) => ModalWidth::from(value),
        },
    }
}

#[component]
pub fn ModalMock(initial_state: Option<String>) -> Element {
    let registry = ControlRegistryBuilder::new()
        .enum_control(
            "variant",
            "Variant",
            "default",
            vec![("small", "Small"), ("default", "Default"), ("large", "Large")],
        )
        .enum_control(
            "width",
            "Width",
            "unset",
            vec![("unset", "Unset"), ("400", "400px"), ("640", "640px"), ("50%", "50%")],
        )
        .doc("Explicit width overrides the variant's max width")
        .enum_control(
            "footer",
            "Footer",
            "actions",
            vec![("none", "None"), ("actions", "Actions"), ("custom", "Custom")],
        )
        .bool_control("open", "Open", true)
        .bool_control("hide_title", "Hide title", false)
        .doc("Title stays available to screen readers")
        .bool_control("show_close", "Close button", true)
        .bool_control("custom_header", "Custom header", false)
        .bool_control("description", "Description", false)
        .bool_control("footer_right", "Right-aligned footer", false)
        .bool_control("disable_focus_trap", "Disable focus trap", false)
        .with_presets(vec![
            Preset::new("Default"),
            Preset::new("Confirmation")
                .set_string("variant", "small")
                .set_bool("footer_right", true),
            Preset::new("Custom Header")
                .set_bool("custom_header", true)
                .set_bool("description", true),
            Preset::new("Fixed Width")
                .set_string("width", "640")
                .set_string("footer", "custom"),
            Preset::new("Bare")
                .set_bool("show_close", false)
                .set_bool("hide_title", true)
                .set_string("footer", "none"),
        ])
        .build(initial_state);

    registry.use_url_sync(|state| Route::MockModal { state });

    let is_open = registry.get_bool("open");
    let variant = variant_from_control(&registry.get_string("variant"));
    let width = width_from_control(&registry.get_string("width"));
    let footer_mode = registry.get_string("footer");
    let hide_title = registry.get_bool("hide_title");
    let show_close = registry.get_bool("show_close");
    let custom_header = registry.get_bool("custom_header");
    let with_description = registry.get_bool("description");
    let footer_right = registry.get_bool("footer_right");
    let disable_focus_trap = registry.get_bool("disable_focus_trap");

    let close = {
        let registry = registry.clone();
        move || registry.set_bool("open", false)
    };

    let header = custom_header.then(|| {
        rsx! {
            div { class: "flex items-center gap-3",
                span { class: "px-2 py-0.5 text-xs rounded bg-amber-600 text-white", "Beta" }
                span { "Sync settings" }
            }
        }
    });
    let description = with_description.then(|| {
        rsx! {
            "Changes apply to every device signed in to this library."
        }
    });
    let footer = (footer_mode == "custom").then(|| {
        rsx! {
            span { class: "text-sm text-gray-400", "Last synced 5 minutes ago" }
        }
    });
    let actions = if footer_mode == "actions" {
        let confirm = close.clone();
        let cancel = close.clone();
        let registry = registry.clone();
        vec![
            rsx! {
                Button {
                    variant: ButtonVariant::Link,
                    class: Some("mr-auto".to_string()),
                    onclick: move |_| registry.set_bool("description", true),
                    "What syncs?"
                }
            },
            rsx! {
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| confirm(),
                    "Confirm"
                }
            },
            rsx! {
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| cancel(),
                    "Cancel"
                }
            },
        ]
    } else {
        Vec::new()
    };

    rsx! {
        MockPanel { title: "ModalContent".to_string(), registry: registry.clone(),
            div { class: "space-y-4",
                p { class: "text-gray-400",
                    "Page content behind the modal. Tab order should stay inside the dialog while it is open."
                }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: {
                        let registry = registry.clone();
                        move |_| registry.set_bool("open", true)
                    },
                    "Open modal"
                }
            }

            ModalContent {
                title: "Sync settings".to_string(),
                id: "mock-modal".to_string(),
                is_open,
                variant,
                width,
                header,
                description,
                hide_title,
                show_close,
                footer,
                actions,
                is_footer_right_aligned: footer_right,
                disable_focus_trap,
                on_close: Some(EventHandler::new(move |_| close())),
                div { class: "space-y-3",
                    p { "Choose what this device keeps in sync." }
                    label { class: "flex items-center gap-2",
                        input { r#type: "checkbox", checked: true }
                        "Playlists"
                    }
                    label { class: "flex items-center gap-2",
                        input { r#type: "checkbox" }
                        "Listening history"
                    }
                }
            }
        }
    }
}
