//! Focus trap region
//!
//! Keeps keyboard focus inside its children while active. The DOM work lives
//! in [`crate::focus`]; this component owns the trap's lifetime.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::focus::{self, FocusTrapOptions, TrapHandle, TrapStep};
use dioxus::prelude::*;
use tracing::{debug, warn};

/// Counter for generating region ids when the caller gives none
static FOCUS_TRAP_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

#[component]
pub fn FocusTrap(
    /// Whether the trap should hold focus
    active: ReadSignal<bool>,
    #[props(default)] options: FocusTrapOptions,
    /// Element id of the region; generated when absent
    #[props(default)]
    id: Option<String>,
    #[props(default)] class: Option<String>,
    /// Called when Escape or an outside click releases the trap
    #[props(default)]
    on_deactivate: Option<EventHandler<()>>,
    children: Element,
) -> Element {
    let generated_id = use_hook(|| {
        let n = FOCUS_TRAP_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("focus-trap-{}", n)
    });
    let region_id = id.unwrap_or(generated_id);
    let region_id_for_effect = region_id.clone();

    // Set when the user released the trap; cleared once `active` goes false
    let mut released = use_signal(|| false);
    let mut handle: Signal<Option<TrapHandle>> = use_signal(|| None);

    use_effect(move || {
        let step = focus::trap_step(active(), released(), handle.peek().is_some());

        match step {
            TrapStep::Arm => {
                let on_release = move || {
                    let mut released = released;
                    released.set(true);
                    if let Some(handler) = on_deactivate {
                        handler.call(());
                    }
                };

                match focus::arm(&region_id_for_effect, options, on_release) {
                    Ok(armed) => handle.set(Some(armed)),
                    Err(e) => warn!("Failed to arm focus trap #{}: {}", region_id_for_effect, e),
                }
            }
            // Dropping the handle removes listeners and returns focus
            TrapStep::Disarm => {
                debug!("Focus trap #{} released", region_id_for_effect);
                handle.set(None);
            }
            TrapStep::ResetRelease => {
                released.set(false);
                if handle.peek().is_some() {
                    handle.set(None);
                }
            }
            TrapStep::Nothing => {}
        }
    });

    rsx! {
        div {
            id: "{region_id}",
            class: class.as_deref(),
            tabindex: "-1",
            {children}
        }
    }
}
