//! Control registry for typed control management with URL sync

use super::preset::Preset;
use crate::mocks::url_state::MockState;
use crate::Route;
use dioxus::prelude::*;
use std::collections::HashMap;
use tracing::warn;

/// Value stored in the control registry
#[derive(Clone, Debug, PartialEq)]
pub enum ControlValue {
    Bool(bool),
    String(String),
}

/// Definition of a control with metadata
#[derive(Clone, Debug, PartialEq)]
pub struct ControlDef {
    pub key: &'static str,
    pub label: &'static str,
    pub default: ControlValue,
    pub doc: Option<&'static str>,
    pub enum_options: Option<Vec<(&'static str, &'static str)>>, // (value, label)
}

impl ControlDef {
    /// Value of this control in `state`, falling back to the default.
    /// Enum values that are not among the options fall back too.
    pub fn initial_value(&self, state: &MockState) -> ControlValue {
        match &self.default {
            ControlValue::Bool(default) => {
                ControlValue::Bool(state.get_bool(self.key).unwrap_or(*default))
            }
            ControlValue::String(default) => {
                let parsed = state.get(self.key).filter(|value| match &self.enum_options {
                    Some(options) => options.iter().any(|(v, _)| v == value),
                    None => true,
                });
                match parsed {
                    Some(value) => ControlValue::String(value.to_string()),
                    None => ControlValue::String(default.clone()),
                }
            }
        }
    }
}

/// Encode the values that differ from their control's default
pub fn state_from_values(
    controls: &[ControlDef],
    values: &HashMap<&'static str, ControlValue>,
) -> MockState {
    let mut state = MockState::default();
    for def in controls {
        match (values.get(def.key), &def.default) {
            (Some(ControlValue::Bool(v)), ControlValue::Bool(default)) if v != default => {
                state.set_bool(def.key, *v);
            }
            (Some(ControlValue::String(v)), ControlValue::String(default)) if v != default => {
                state.set_string(def.key, v);
            }
            _ => {}
        }
    }
    state
}

/// Builder for creating a ControlRegistry
pub struct ControlRegistryBuilder {
    controls: Vec<ControlDef>,
    presets: Vec<Preset>,
}

impl ControlRegistryBuilder {
    pub fn new() -> Self {
        Self {
            controls: Vec::new(),
            presets: Vec::new(),
        }
    }

    /// Add a boolean control
    pub fn bool_control(mut self, key: &'static str, label: &'static str, default: bool) -> Self {
        self.controls.push(ControlDef {
            key,
            label,
            default: ControlValue::Bool(default),
            doc: None,
            enum_options: None,
        });
        self
    }

    /// Add an enum control (represented as string internally)
    pub fn enum_control(
        mut self,
        key: &'static str,
        label: &'static str,
        default: &'static str,
        options: Vec<(&'static str, &'static str)>,
    ) -> Self {
        if !options.iter().any(|(value, _)| *value == default) {
            warn!("Enum control '{}' default '{}' is not an option", key, default);
        }
        self.controls.push(ControlDef {
            key,
            label,
            default: ControlValue::String(default.to_string()),
            doc: None,
            enum_options: Some(options),
        });
        self
    }

    /// Add documentation to the last control
    pub fn doc(mut self, doc: &'static str) -> Self {
        if let Some(last) = self.controls.last_mut() {
            last.doc = Some(doc);
        }
        self
    }

    pub fn with_presets(mut self, presets: Vec<Preset>) -> Self {
        self.presets = presets;
        self
    }

    /// Build the registry - must be called inside a component (uses hooks)
    pub fn build(self, initial_state: Option<String>) -> ControlRegistry {
        let state = initial_state
            .as_deref()
            .map(MockState::decode)
            .unwrap_or_default();

        let mut values: HashMap<&'static str, Signal<ControlValue>> = HashMap::new();
        for def in &self.controls {
            let initial = def.initial_value(&state);
            let signal = use_signal(|| initial);
            values.insert(def.key, signal);
        }

        ControlRegistry {
            controls: self.controls,
            values,
            presets: self.presets,
        }
    }
}

impl Default for ControlRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry holding all controls and their current values
#[derive(Clone, PartialEq)]
pub struct ControlRegistry {
    pub controls: Vec<ControlDef>,
    pub values: HashMap<&'static str, Signal<ControlValue>>,
    pub presets: Vec<Preset>,
}

impl ControlRegistry {
    /// Get a boolean value (reads signal, creating subscription)
    pub fn get_bool(&self, key: &'static str) -> bool {
        self.values
            .get(key)
            .map(|s| matches!(&*s.read(), ControlValue::Bool(true)))
            .unwrap_or(false)
    }

    /// Get a string value (reads signal, creating subscription)
    pub fn get_string(&self, key: &'static str) -> String {
        self.values
            .get(key)
            .map(|s| match &*s.read() {
                ControlValue::String(s) => s.clone(),
                ControlValue::Bool(_) => String::new(),
            })
            .unwrap_or_default()
    }

    pub fn set_bool(&self, key: &'static str, value: bool) {
        if let Some(mut signal) = self.values.get(key).copied() {
            signal.set(ControlValue::Bool(value));
        }
    }

    pub fn set_string(&self, key: &'static str, value: String) {
        if let Some(mut signal) = self.values.get(key).copied() {
            signal.set(ControlValue::String(value));
        }
    }

    /// Current values (reads every signal, creating subscriptions)
    pub fn snapshot(&self) -> HashMap<&'static str, ControlValue> {
        self.values
            .iter()
            .map(|(key, signal)| (*key, signal.read().clone()))
            .collect()
    }

    /// Reset all controls to defaults, then apply the preset's values
    pub fn apply_preset(&self, preset: &Preset) {
        for control in &self.controls {
            if let Some(mut signal) = self.values.get(control.key).copied() {
                signal.set(control.default.clone());
            }
        }
        for (key, value) in &preset.values {
            if let Some(mut signal) = self.values.get(key.as_str()).copied() {
                signal.set(value.clone());
            }
        }
    }

    /// Keep the page URL in sync with the control values.
    /// Skips the first run so the initial URL is left untouched.
    pub fn use_url_sync(&self, to_route: fn(Option<String>) -> Route) {
        let registry = self.clone();
        let mut is_mounted = use_signal(|| false);

        use_effect(move || {
            let values = registry.snapshot();

            if !*is_mounted.peek() {
                is_mounted.set(true);
                return;
            }

            let state = state_from_values(&registry.controls, &values);
            navigator().replace(to_route(state.encode()));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controls() -> Vec<ControlDef> {
        vec![
            ControlDef {
                key: "open",
                label: "Open",
                default: ControlValue::Bool(true),
                doc: None,
                enum_options: None,
            },
            ControlDef {
                key: "variant",
                label: "Variant",
                default: ControlValue::String("default".to_string()),
                doc: None,
                enum_options: Some(vec![("small", "Small"), ("default", "Default")]),
            },
        ]
    }

    #[test]
    fn test_initial_values_default_without_state() {
        let state = MockState::default();
        let controls = controls();
        assert_eq!(controls[0].initial_value(&state), ControlValue::Bool(true));
        assert_eq!(
            controls[1].initial_value(&state),
            ControlValue::String("default".to_string())
        );
    }

    #[test]
    fn test_initial_values_read_state() {
        let mut state = MockState::default();
        state.set_bool("open", false);
        state.set_string("variant", "small");
        let controls = controls();
        assert_eq!(controls[0].initial_value(&state), ControlValue::Bool(false));
        assert_eq!(
            controls[1].initial_value(&state),
            ControlValue::String("small".to_string())
        );
    }

    #[test]
    fn test_unknown_enum_value_falls_back() {
        let mut state = MockState::default();
        state.set_string("variant", "huge");
        assert_eq!(
            controls()[1].initial_value(&state),
            ControlValue::String("default".to_string())
        );
    }

    #[test]
    fn test_state_keeps_only_changed_values() {
        let controls = controls();
        let mut values = HashMap::new();
        values.insert("open", ControlValue::Bool(true));
        values.insert("variant", ControlValue::String("small".to_string()));

        let state = state_from_values(&controls, &values);
        assert_eq!(state.get("open"), None);
        assert_eq!(state.get("variant"), Some("small"));
    }

    #[test]
    fn test_default_values_encode_to_no_state() {
        let controls = controls();
        let values: HashMap<_, _> = controls.iter().map(|c| (c.key, c.default.clone())).collect();
        assert_eq!(state_from_values(&controls, &values).encode(), None);
    }
}
