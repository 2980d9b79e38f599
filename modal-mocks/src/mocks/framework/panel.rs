//! Control panel around a mock page
//!
//! Controls render as labelled rows in declaration order: enum controls as a
//! segmented group, bool controls as a switch. Presets sit above the rows and
//! the one matching the current values is marked as pressed.

use super::preset::Preset;
use super::registry::{ControlDef, ControlRegistry, ControlValue};
use crate::Route;
use dioxus::prelude::*;
use std::collections::HashMap;

/// Name of the first preset the current values match
fn active_preset(
    presets: &[Preset],
    controls: &[ControlDef],
    current: &HashMap<&'static str, ControlValue>,
) -> Option<&'static str> {
    presets
        .iter()
        .find(|preset| preset.matches(controls, current))
        .map(|preset| preset.name)
}

fn segment_class(selected: bool) -> &'static str {
    if selected {
        "px-3 py-1 text-xs bg-blue-600 text-white"
    } else {
        "px-3 py-1 text-xs text-gray-300 hover:bg-gray-700"
    }
}

#[component]
pub fn MockPanel(title: String, registry: ControlRegistry, children: Element) -> Element {
    rsx! {
        div { class: "min-h-screen bg-gray-900 text-white",
            header { class: "sticky top-0 z-50 bg-gray-800 border-b border-gray-700",
                div { class: "max-w-4xl mx-auto px-4 py-3 space-y-3",
                    nav { class: "flex items-baseline gap-3",
                        Link {
                            to: Route::MockIndex {},
                            class: "text-sm text-gray-400 hover:text-white",
                            "← Mocks"
                        }
                        h1 { class: "text-lg font-semibold", "{title}" }
                    }
                    if !registry.presets.is_empty() {
                        PresetBar { registry: registry.clone() }
                    }
                    div { class: "grid grid-cols-[9rem_1fr] gap-x-4 gap-y-2 items-center",
                        for control in registry.controls.iter() {
                            ControlField { registry: registry.clone(), control: control.clone() }
                        }
                    }
                }
            }
            main { class: "max-w-4xl mx-auto p-6", {children} }
        }
    }
}

#[component]
fn PresetBar(registry: ControlRegistry) -> Element {
    let current = registry.snapshot();
    let active = active_preset(&registry.presets, &registry.controls, &current);

    rsx! {
        div { class: "flex flex-wrap items-center gap-2",
            span { class: "text-xs uppercase tracking-wide text-gray-500 mr-1", "Presets" }
            for preset in registry.presets.iter() {
                button {
                    class: "px-2 py-1 text-xs rounded border border-gray-600 aria-pressed:bg-blue-600 aria-pressed:border-blue-600 hover:bg-gray-700",
                    aria_pressed: if active == Some(preset.name) { "true" } else { "false" },
                    onclick: {
                        let preset = preset.clone();
                        let registry = registry.clone();
                        move |_| registry.apply_preset(&preset)
                    },
                    "{preset.name}"
                }
            }
            if active.is_none() {
                span { class: "text-xs italic text-gray-500", "custom" }
            }
        }
    }
}

/// One labelled row; subscribes only to its own control's signal
#[component]
fn ControlField(registry: ControlRegistry, control: ControlDef) -> Element {
    let key = control.key;

    let field = match control.enum_options.clone() {
        Some(options) => {
            let selected = registry.get_string(key);
            rsx! {
                div {
                    role: "radiogroup",
                    aria_label: control.label,
                    class: "inline-flex w-fit rounded border border-gray-600 overflow-hidden",
                    for (value, label) in options {
                        button {
                            role: "radio",
                            aria_checked: if selected == value { "true" } else { "false" },
                            class: segment_class(selected == value),
                            onclick: {
                                let registry = registry.clone();
                                move |_| registry.set_string(key, value.to_string())
                            },
                            "{label}"
                        }
                    }
                }
            }
        }
        None => {
            let on = registry.get_bool(key);
            rsx! {
                label { class: "inline-flex items-center gap-2 text-sm text-gray-300",
                    input {
                        r#type: "checkbox",
                        role: "switch",
                        checked: on,
                        onchange: {
                            let registry = registry.clone();
                            move |e: FormEvent| registry.set_bool(key, e.checked())
                        },
                    }
                    if on { "on" } else { "off" }
                }
            }
        }
    };

    rsx! {
        span { class: "text-xs text-gray-400", title: control.doc.unwrap_or(""), "{control.label}" }
        {field}
    }
}
