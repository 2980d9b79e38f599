//! Focus confinement for modal regions
//!
//! The decisions (which element gets focus next, what a key or an outside
//! click does) are plain functions over counts and options. The DOM side
//! wires those decisions to document-level listeners.
//!
//! # Listener Cleanup Pattern
//!
//! Every listener is owned by a [`DocumentListener`], which removes itself
//! from the document when dropped. A [`TrapHandle`] owns the listeners of one
//! armed trap, so dropping the handle disarms the trap:
//!
//! ```ignore
//! let handle = arm("settings-modal-focus-trap", FocusTrapOptions::default(), || {})?;
//! // Tab cycling, Escape and outside clicks are now handled
//! drop(handle); // listeners removed, previous focus restored
//! ```

use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::rc::Rc;
use tracing::{debug, warn};
use wasm_bindgen_x::prelude::*;
use wasm_bindgen_x::JsCast;

/// Elements reachable with the Tab key
pub const TABBABLE_SELECTOR: &str = "a[href], area[href], button:not([disabled]), \
    input:not([disabled]):not([type='hidden']), select:not([disabled]), \
    textarea:not([disabled]), iframe, [contenteditable='true'], \
    [tabindex]:not([tabindex='-1'])";

#[derive(Debug, thiserror::Error)]
pub enum FocusError {
    #[error("No browser window available")]
    NoWindow,
    #[error("No document available")]
    NoDocument,
    #[error("Focus trap region not found: {0}")]
    RegionNotFound(String),
    #[error("DOM call failed: {0}")]
    Dom(String),
}

impl From<JsValue> for FocusError {
    fn from(value: JsValue) -> Self {
        FocusError::Dom(format!("{:?}", value))
    }
}

/// Behavior of an active focus trap
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusTrapOptions {
    /// A pointer press outside the region releases the trap (and the press
    /// goes through). When false, outside presses are swallowed.
    pub click_outside_deactivates: bool,
    /// Escape releases the trap
    pub escape_deactivates: bool,
    /// Focus goes back to the element that had it before activation
    pub return_focus_on_deactivate: bool,
}

impl Default for FocusTrapOptions {
    fn default() -> Self {
        Self {
            click_outside_deactivates: false,
            escape_deactivates: true,
            return_focus_on_deactivate: true,
        }
    }
}

/// What a keydown inside an active trap should do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    CycleFocus { backwards: bool },
    Deactivate,
    Ignore,
}

/// What a pointer press outside an active trap should do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickAction {
    Deactivate,
    Block,
}

pub fn key_action(key: &str, shift: bool, options: &FocusTrapOptions) -> KeyAction {
    match key {
        "Tab" => KeyAction::CycleFocus { backwards: shift },
        "Escape" | "Esc" if options.escape_deactivates => KeyAction::Deactivate,
        _ => KeyAction::Ignore,
    }
}

pub fn outside_click_action(options: &FocusTrapOptions) -> ClickAction {
    if options.click_outside_deactivates {
        ClickAction::Deactivate
    } else {
        ClickAction::Block
    }
}

/// What a trap should do when its `active` flag or release state changes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrapStep {
    /// Install listeners and move focus inside
    Arm,
    /// Drop the listeners and return focus
    Disarm,
    /// Deactivated after a release: clear the release and drop any listeners,
    /// so the next activation arms again
    ResetRelease,
    Nothing,
}

/// Next step of a trap given whether it should hold focus, whether the user
/// released it, and whether listeners are currently installed.
///
/// A released trap stays quiet while `active` remains true; only a
/// false-to-true transition of `active` arms it again.
pub fn trap_step(active: bool, released: bool, armed: bool) -> TrapStep {
    match (active, released, armed) {
        (false, true, _) => TrapStep::ResetRelease,
        (false, false, true) | (true, true, true) => TrapStep::Disarm,
        (true, false, false) => TrapStep::Arm,
        (false, false, false) | (true, true, false) | (true, false, true) => TrapStep::Nothing,
    }
}

/// Index of the tabbable element that should receive focus next.
///
/// `current` is the index of the focused element among the `count` tabbable
/// elements, or `None` when focus is elsewhere. Wraps at both ends.
pub fn next_focus_index(count: usize, current: Option<usize>, backwards: bool) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let next = match (current, backwards) {
        (None, false) => 0,
        (None, true) => count - 1,
        (Some(index), false) => (index + 1) % count,
        (Some(0), true) => count - 1,
        (Some(index), true) => (index - 1).min(count - 1),
    };
    Some(next)
}

/// A document event listener that removes itself when dropped.
///
/// Listens in the capture phase so the trap sees events before handlers
/// inside the page can stop them.
pub struct DocumentListener {
    document: web_sys_x::Document,
    event_name: &'static str,
    callback: Closure<dyn FnMut(JsValue)>,
}

impl DocumentListener {
    pub fn new(
        document: web_sys_x::Document,
        event_name: &'static str,
        callback: impl FnMut(JsValue) + 'static,
    ) -> Result<Self, FocusError> {
        let callback: Closure<dyn FnMut(JsValue)> = Closure::wrap(Box::new(callback));

        document.add_event_listener_with_callback_and_bool(
            event_name,
            callback.as_ref().unchecked_ref(),
            true,
        )?;

        Ok(Self {
            document,
            event_name,
            callback,
        })
    }
}

impl Drop for DocumentListener {
    fn drop(&mut self) {
        let _ = self.document.remove_event_listener_with_callback_and_bool(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
            true,
        );
    }
}

/// Listeners and saved focus of an armed trap. Dropping it disarms the trap.
pub struct TrapHandle {
    _keydown: DocumentListener,
    _mousedown: DocumentListener,
    _focusin: DocumentListener,
    previous_focus: Option<web_sys_x::HtmlElement>,
    return_focus: bool,
}

impl Drop for TrapHandle {
    fn drop(&mut self) {
        if !self.return_focus {
            return;
        }
        if let Some(previous) = self.previous_focus.take() {
            if let Err(e) = previous.focus() {
                warn!("Failed to return focus after trap release: {:?}", e);
            }
        }
    }
}

/// Tabbable elements inside `region`, in document order
pub fn tabbable_elements(
    region: &web_sys_x::Element,
) -> Result<Vec<web_sys_x::HtmlElement>, FocusError> {
    let nodes = region.query_selector_all(TABBABLE_SELECTOR)?;
    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(element) = nodes
            .get(i)
            .and_then(|node| node.dyn_into::<web_sys_x::HtmlElement>().ok())
        {
            elements.push(element);
        }
    }
    Ok(elements)
}

/// Focus the first tabbable element, or the region itself when it has none
pub fn focus_first(region: &web_sys_x::Element) -> Result<(), FocusError> {
    let tabbables = tabbable_elements(region)?;
    if let Some(first) = tabbables.first() {
        first.focus()?;
        return Ok(());
    }
    if let Some(region) = region.dyn_ref::<web_sys_x::HtmlElement>() {
        region.focus()?;
    }
    Ok(())
}

/// Move focus one tabbable element forwards or backwards, wrapping around
pub fn cycle_focus(
    document: &web_sys_x::Document,
    region: &web_sys_x::Element,
    backwards: bool,
) -> Result<(), FocusError> {
    let tabbables = tabbable_elements(region)?;
    let active = document.active_element();
    let current = active.as_ref().and_then(|active| {
        tabbables
            .iter()
            .position(|el| AsRef::<web_sys_x::Element>::as_ref(el) == active)
    });

    match next_focus_index(tabbables.len(), current, backwards) {
        Some(index) => tabbables[index].focus()?,
        None => focus_first(region)?,
    }
    Ok(())
}

fn event_is_inside(region: &web_sys_x::Element, event: &web_sys_x::Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<web_sys_x::Node>().ok())
        .map(|node| region.contains(Some(&node)))
        .unwrap_or(false)
}

/// Arm a focus trap on the element with id `region_id`.
///
/// `on_release` runs when Escape or an outside click releases the trap; the
/// caller is expected to drop the returned handle in response.
pub fn arm(
    region_id: &str,
    options: FocusTrapOptions,
    on_release: impl Fn() + Clone + 'static,
) -> Result<TrapHandle, FocusError> {
    let window = web_sys_x::window().ok_or(FocusError::NoWindow)?;
    let document = window.document().ok_or(FocusError::NoDocument)?;
    let region = document
        .get_element_by_id(region_id)
        .ok_or_else(|| FocusError::RegionNotFound(region_id.to_string()))?;

    let previous_focus = document
        .active_element()
        .and_then(|el| el.dyn_into::<web_sys_x::HtmlElement>().ok());

    // Listeners go quiet once released, before the handle is dropped
    let released = Rc::new(Cell::new(false));

    let keydown = {
        let released = released.clone();
        let document_for_cb = document.clone();
        let region = region.clone();
        let on_release = on_release.clone();
        DocumentListener::new(document.clone(), "keydown", move |e: JsValue| {
            if released.get() {
                return;
            }
            let Some(event) = e.dyn_ref::<web_sys_x::KeyboardEvent>() else {
                return;
            };
            match key_action(&event.key(), event.shift_key(), &options) {
                KeyAction::CycleFocus { backwards } => {
                    event.prevent_default();
                    if let Err(e) = cycle_focus(&document_for_cb, &region, backwards) {
                        warn!("Failed to move focus inside trap: {}", e);
                    }
                }
                KeyAction::Deactivate => {
                    debug!("Focus trap released by Escape");
                    released.set(true);
                    on_release();
                }
                KeyAction::Ignore => {}
            }
        })?
    };

    let mousedown = {
        let region = region.clone();
        let released = released.clone();
        DocumentListener::new(document.clone(), "mousedown", move |e: JsValue| {
            if released.get() {
                return;
            }
            let Some(event) = e.dyn_ref::<web_sys_x::Event>() else {
                return;
            };
            if event_is_inside(&region, event) {
                return;
            }
            match outside_click_action(&options) {
                ClickAction::Deactivate => {
                    debug!("Focus trap released by outside click");
                    released.set(true);
                    on_release();
                }
                ClickAction::Block => {
                    event.prevent_default();
                    event.stop_propagation();
                }
            }
        })?
    };

    let focusin = {
        let region = region.clone();
        DocumentListener::new(document, "focusin", move |e: JsValue| {
            if released.get() {
                return;
            }
            let Some(event) = e.dyn_ref::<web_sys_x::Event>() else {
                return;
            };
            if event_is_inside(&region, event) {
                return;
            }
            if let Err(e) = focus_first(&region) {
                warn!("Failed to pull focus back into trap: {}", e);
            }
        })?
    };

    let handle = TrapHandle {
        _keydown: keydown,
        _mousedown: mousedown,
        _focusin: focusin,
        previous_focus,
        return_focus: options.return_focus_on_deactivate,
    };

    // Focus moves last: on failure the handle drops and focus goes back
    focus_first(&region)?;

    debug!("Focus trap armed on #{}", region_id);

    Ok(handle)
}
