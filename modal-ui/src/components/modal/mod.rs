//! Modal dialog: the box parts and the `ModalContent` view composing them

mod body;
mod close_button;
mod content;
mod description;
mod footer;
mod header;
mod modal_box;

pub use body::ModalBoxBody;
pub use close_button::{request_close, ModalBoxCloseButton};
pub use content::ModalContent;
pub use description::ModalBoxDescription;
pub use footer::ModalBoxFooter;
pub use header::ModalBoxHeader;
pub use modal_box::ModalBox;
