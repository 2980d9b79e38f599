//! Button primitives used by modal actions and the close control

use dioxus::prelude::*;

/// Unstyled button: keeps the accessibility attributes and the disabled
/// guard, leaves the look to the caller.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] id: Option<String>,
    #[props(default)] class: Option<String>,
    #[props(default)] aria_label: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: class.as_deref(),
            id: id.as_deref(),
            disabled,
            aria_label: aria_label.as_deref(),
            aria_disabled: if disabled { Some("true") } else { None },
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Main action of a modal footer
    #[default]
    Primary,
    /// Cancel and other secondary actions
    Secondary,
    /// Text-only action
    Link,
    /// Icon-only control, no background
    Plain,
}

impl ButtonVariant {
    fn as_class(&self) -> &'static str {
        match self {
            Self::Primary => {
                "px-4 py-2 rounded-lg bg-indigo-600 hover:bg-indigo-500 text-white disabled:opacity-50"
            }
            Self::Secondary => {
                "px-4 py-2 rounded-lg bg-gray-700 hover:bg-gray-600 text-gray-300 disabled:opacity-50"
            }
            Self::Link => "px-2 py-2 text-indigo-400 hover:text-indigo-300 disabled:opacity-50",
            Self::Plain => "p-1 rounded text-gray-400 hover:text-white transition-colors",
        }
    }
}

/// Styled button for modal footers
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] id: Option<String>,
    #[props(default)] aria_label: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let computed_class = match &class {
        Some(extra) => format!("inline-flex items-center gap-2 {} {extra}", variant.as_class()),
        None => format!("inline-flex items-center gap-2 {}", variant.as_class()),
    };

    rsx! {
        ChromelessButton {
            id,
            disabled,
            aria_label,
            class: Some(computed_class),
            onclick,
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_disabled_button_is_marked() {
        fn app() -> Element {
            rsx! {
                Button { disabled: true, onclick: |_| {}, "Save" }
            }
        }

        let html = render(app);
        assert!(html.contains("aria-disabled=\"true\""));
        assert!(html.contains("type=\"button\""));
    }

    #[test]
    fn test_extra_class_is_appended() {
        fn app() -> Element {
            rsx! {
                Button {
                    variant: ButtonVariant::Secondary,
                    class: Some("ml-auto".to_string()),
                    onclick: |_| {},
                    "Cancel"
                }
            }
        }

        let html = render(app);
        assert!(html.contains(ButtonVariant::Secondary.as_class()));
        assert!(html.contains("ml-auto"));
    }

    #[test]
    fn test_link_variant_has_no_background() {
        fn app() -> Element {
            rsx! {
                Button { variant: ButtonVariant::Link, onclick: |_| {}, "What syncs?" }
            }
        }

        let html = render(app);
        assert!(html.contains(ButtonVariant::Link.as_class()));
        assert!(!html.contains("bg-indigo-600"));
    }
}
