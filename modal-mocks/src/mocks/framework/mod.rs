//! Mock framework for Storybook-like component development
//!
//! Provides:
//! - ControlRegistry: typed control bag with URL sync
//! - Presets: named state configurations for quick switching
//! - MockPanel: control panel UI around the rendered component

mod panel;
mod preset;
mod registry;

pub use panel::MockPanel;
pub use preset::Preset;
pub use registry::{ControlRegistry, ControlRegistryBuilder, ControlValue};
