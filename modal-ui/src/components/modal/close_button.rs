//! Close control in the corner of the modal box

use crate::components::button::{Button, ButtonVariant};
use crate::components::icons::XIcon;
use dioxus::prelude::*;
use tracing::debug;

/// Forward a close request to the caller's handler, if any
pub fn request_close(on_close: Option<EventHandler<()>>) {
    match on_close {
        Some(handler) => {
            debug!("Modal close requested");
            handler.call(());
        }
        None => debug!("Modal close requested without a handler"),
    }
}

#[component]
pub fn ModalBoxCloseButton(#[props(default)] on_close: Option<EventHandler<()>>) -> Element {
    rsx! {
        div { class: "absolute top-4 right-4",
            Button {
                variant: ButtonVariant::Plain,
                aria_label: Some("Close".to_string()),
                onclick: move |_| request_close(on_close),
                XIcon { class: "w-5 h-5" }
            }
        }
    }
}
