//! modal mocks - Web app rendering modal components with interactive controls
//!
//! Each mock page keeps its control values in the URL so a state can be
//! shared or reloaded.

pub mod mocks;
pub mod pages;

use dioxus::prelude::*;
use pages::{MockIndex, MockModal};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
/// Generated by build.rs from tailwind.css
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    MockIndex {},
    #[route("/modal?:state")]
    MockModal { state: Option<String> },
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
