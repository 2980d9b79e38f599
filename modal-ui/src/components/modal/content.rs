//! Modal content view
//!
//! Pure, props-based: renders nothing while closed, otherwise a backdrop
//! holding a focus-trapped, centered modal box.

use super::{
    ModalBox, ModalBoxBody, ModalBoxCloseButton, ModalBoxDescription, ModalBoxFooter,
    ModalBoxHeader,
};
use crate::components::{Backdrop, FocusTrap};
use crate::display_types::{ModalVariant, ModalWidth};
use crate::focus::FocusTrapOptions;
use dioxus::prelude::*;

#[component]
pub fn ModalContent(
    /// Plain header text, also the dialog's accessible label
    title: String,
    /// Id of the body (or of the description when one is given)
    id: String,
    children: Element,
    #[props(default)] class: Option<String>,
    #[props(default)] variant: ModalVariant,
    #[props(default)] is_open: bool,
    /// Replaces the standard title header
    #[props(default)]
    header: Option<Element>,
    #[props(default)] description: Option<Element>,
    /// Ignored when `header` is given
    #[props(default)]
    hide_title: bool,
    #[props(default = true)] show_close: bool,
    #[props(default, into)] width: ModalWidth,
    /// Replaces the footer built from `actions`
    #[props(default)]
    footer: Option<Element>,
    #[props(default)] actions: Vec<Element>,
    #[props(default)] is_footer_right_aligned: bool,
    #[props(default)] on_close: Option<EventHandler<()>>,
    #[props(default)] modal_box_aria_described_by_id: Option<String>,
    #[props(default)] disable_focus_trap: bool,
    /// Extra attributes for the body element
    #[props(default)]
    body_attributes: Vec<Attribute>,
) -> Element {
    if !is_open {
        return rsx! {};
    }

    let footer_content = match footer {
        Some(footer) => Some(footer),
        None if !actions.is_empty() => Some(rsx! {
            for action in actions.iter() {
                {action.clone()}
            }
        }),
        None => None,
    };

    let described_by = modal_box_aria_described_by_id
        .filter(|described_by| !described_by.is_empty())
        .unwrap_or_else(|| id.clone());
    let body_id = if description.is_none() {
        Some(id.clone())
    } else {
        None
    };
    let trap_options = FocusTrapOptions {
        click_outside_deactivates: true,
        ..FocusTrapOptions::default()
    };

    rsx! {
        Backdrop {
            FocusTrap {
                active: !disable_focus_trap,
                options: trap_options,
                id: Some(format!("{id}-focus-trap")),
                class: Some("flex items-center justify-center h-full w-full".to_string()),
                ModalBox {
                    title: title.clone(),
                    described_by,
                    variant,
                    class,
                    width,
                    if show_close {
                        ModalBoxCloseButton { on_close }
                    }
                    if let Some(header) = header {
                        div { class: "px-6 pt-6 pb-4 text-xl font-bold text-white", {header} }
                    } else {
                        ModalBoxHeader { hide_title, "{title}" }
                    }
                    if let Some(description) = description {
                        ModalBoxDescription { id: id.clone(), {description} }
                    }
                    ModalBoxBody { id: body_id, attributes: body_attributes, {children} }
                    if let Some(footer_content) = footer_content {
                        ModalBoxFooter { is_right_aligned: is_footer_right_aligned, {footer_content} }
                    }
                }
            }
        }
    }
}
