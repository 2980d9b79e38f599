//! State presets for quick configuration switching

use super::registry::{ControlDef, ControlValue};
use std::collections::HashMap;

/// A named preset with predefined control values
#[derive(Clone, Debug, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub values: HashMap<String, ControlValue>,
}

impl Preset {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            values: HashMap::new(),
        }
    }

    pub fn set_bool(mut self, key: &'static str, value: bool) -> Self {
        self.values
            .insert(key.to_string(), ControlValue::Bool(value));
        self
    }

    pub fn set_string(mut self, key: &'static str, value: &'static str) -> Self {
        self.values
            .insert(key.to_string(), ControlValue::String(value.to_string()));
        self
    }

    /// A preset matches when every control it names has the preset's value
    /// and every other control sits at its default.
    pub fn matches(
        &self,
        controls: &[ControlDef],
        current: &HashMap<&'static str, ControlValue>,
    ) -> bool {
        controls.iter().all(|control| {
            let expected = self.values.get(control.key).unwrap_or(&control.default);
            current.get(control.key) == Some(expected)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controls() -> Vec<ControlDef> {
        vec![
            ControlDef {
                key: "show_close",
                label: "Show close",
                default: ControlValue::Bool(true),
                doc: None,
                enum_options: None,
            },
            ControlDef {
                key: "footer",
                label: "Footer",
                default: ControlValue::String("actions".to_string()),
                doc: None,
                enum_options: Some(vec![("none", "None"), ("actions", "Actions")]),
            },
        ]
    }

    fn defaults(controls: &[ControlDef]) -> HashMap<&'static str, ControlValue> {
        controls.iter().map(|c| (c.key, c.default.clone())).collect()
    }

    #[test]
    fn test_empty_preset_matches_defaults() {
        let controls = controls();
        assert!(Preset::new("Default").matches(&controls, &defaults(&controls)));
    }

    #[test]
    fn test_preset_requires_its_values() {
        let controls = controls();
        let preset = Preset::new("Bare")
            .set_bool("show_close", false)
            .set_string("footer", "none");
        assert!(!preset.matches(&controls, &defaults(&controls)));

        let mut current = defaults(&controls);
        current.insert("show_close", ControlValue::Bool(false));
        current.insert("footer", ControlValue::String("none".to_string()));
        assert!(preset.matches(&controls, &current));
    }

    #[test]
    fn test_preset_rejects_changes_it_does_not_name() {
        let controls = controls();
        let preset = Preset::new("No close").set_bool("show_close", false);

        let mut current = defaults(&controls);
        current.insert("show_close", ControlValue::Bool(false));
        current.insert("footer", ControlValue::String("none".to_string()));
        assert!(!preset.matches(&controls, &current));
    }
}
