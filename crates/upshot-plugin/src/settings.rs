//! Plugin settings.
//!
//! A plugin declares the settings it understands as a [`SettingsSpec`]; the
//! pipeline resolves values from its configuration and hands them back as a
//! [`Settings`] map on every lifecycle call.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Declared description of a single setting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingSpec {
    /// Value type the pipeline should collect (`"bool"`, `"str"`, `"int"`, ...).
    #[serde(rename = "type")]
    pub setting_type: String,

    /// Default value used when the pipeline supplies none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    /// One-line description shown in the UI.
    pub description: String,
}

/// The settings a plugin declares it understands, keyed by setting name.
pub type SettingsSpec = BTreeMap<String, SettingSpec>;

/// Per-invocation setting values supplied by the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings(BTreeMap<String, Value>);

impl Settings {
    /// Creates an empty settings map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets a setting value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Sets a setting value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    /// Whether no values were supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_settings_empty() {
        let settings = Settings::new();
        assert!(settings.is_empty());
        assert!(settings.get("anything").is_none());
    }

    #[test]
    fn test_settings_insert_and_get() {
        let mut settings = Settings::new();
        settings.insert("padding", json!(3));
        assert_eq!(settings.get("padding"), Some(&json!(3)));
        assert!(!settings.is_empty());
    }

    #[test]
    fn test_settings_overwrite() {
        let mut settings = Settings::new();
        settings.insert("key", json!("first"));
        settings.insert("key", json!("second"));
        assert_eq!(settings.get("key"), Some(&json!("second")));
    }

    #[test]
    fn test_spec_serialization() {
        let spec = SettingSpec {
            setting_type: "bool".to_string(),
            default: Some(json!(true)),
            description: "Example toggle".to_string(),
        };
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["type"], "bool");
        assert_eq!(json["default"], true);
    }

    #[test]
    fn test_spec_omits_missing_default() {
        let spec = SettingSpec {
            setting_type: "str".to_string(),
            default: None,
            description: "No default".to_string(),
        };
        let json = serde_json::to_value(&spec).unwrap();
        assert!(json.get("default").is_none());
    }
}
