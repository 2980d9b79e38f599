//! modal mocks - interactive playground for modal components

fn main() {
    dioxus::launch(modal_mocks::App);
}
