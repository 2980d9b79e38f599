//! URL state persistence for mock pages
//!
//! Control values are stored as base64-encoded JSON in a single query
//! parameter, which keeps URLs opaque and free of key collisions.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// Non-default control values of a mock page, keyed by control key
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MockState(BTreeMap<String, String>);

impl MockState {
    /// Decode the query parameter. Malformed input yields an empty state.
    pub fn decode(encoded: &str) -> Self {
        if encoded.is_empty() {
            return Self::default();
        }

        let bytes = match URL_SAFE_NO_PAD.decode(encoded) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Ignoring undecodable mock state: {}", e);
                return Self::default();
            }
        };

        serde_json::from_slice(&bytes).unwrap_or_else(|e| {
            warn!("Ignoring malformed mock state: {}", e);
            Self::default()
        })
    }

    /// Encode for the query parameter; `None` when nothing differs from defaults
    pub fn encode(&self) -> Option<String> {
        if self.0.is_empty() {
            return None;
        }
        match serde_json::to_vec(&self.0) {
            Ok(json) => Some(URL_SAFE_NO_PAD.encode(json)),
            Err(e) => {
                warn!("Failed to encode mock state: {}", e);
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).map(|v| v == "1" || v == "true")
    }

    pub fn set_bool(&mut self, key: &str, value: bool) {
        self.0
            .insert(key.to_string(), if value { "1" } else { "0" }.to_string());
    }

    pub fn set_string(&mut self, key: &str, value: &str) {
        self.0.insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state_encodes_to_none() {
        assert_eq!(MockState::default().encode(), None);
    }

    #[test]
    fn test_state_survives_the_url() {
        let mut state = MockState::default();
        state.set_bool("open", false);
        state.set_string("variant", "large");

        let encoded = state.encode().unwrap();
        assert!(!encoded.contains('='));

        let decoded = MockState::decode(&encoded);
        assert_eq!(decoded.get_bool("open"), Some(false));
        assert_eq!(decoded.get("variant"), Some("large"));
        assert_eq!(decoded.get("width"), None);
    }

    #[test]
    fn test_garbage_decodes_to_empty() {
        assert_eq!(MockState::decode("!!not-base64!!"), MockState::default());
        let not_json = URL_SAFE_NO_PAD.encode(b"not json");
        assert_eq!(MockState::decode(&not_json), MockState::default());
    }

    #[test]
    fn test_bool_accepts_true_literal() {
        let encoded = URL_SAFE_NO_PAD.encode(br#"{"open":"true","hide_title":"0"}"#);
        let state = MockState::decode(&encoded);
        assert_eq!(state.get_bool("open"), Some(true));
        assert_eq!(state.get_bool("hide_title"), Some(false));
    }
}
