//! Modal UI components

pub mod backdrop;
pub mod button;
pub mod focus_trap;
pub mod icons;
pub mod modal;

pub use backdrop::Backdrop;
pub use button::{Button, ButtonVariant, ChromelessButton};
pub use focus_trap::FocusTrap;
pub use icons::XIcon;
pub use modal::{
    request_close, ModalBox, ModalBoxBody, ModalBoxCloseButton, ModalBoxDescription,
    ModalBoxFooter, ModalBoxHeader, ModalContent,
};
