//! modal-ui - Modal dialog components for the design system
//!
//! Contains the modal box parts, the backdrop, the focus trap helper, and the
//! `ModalContent` view that composes them from a props bag.

pub mod components;
pub mod display_types;
pub mod focus;

pub use components::*;
pub use display_types::*;
