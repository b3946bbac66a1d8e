use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A configuration value bound to a page element.
///
/// Scalars come from `key = value` lines (quotes stripped); maps come from
/// nested `key = { ... }` blocks and are used for puzzle parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// A flat string value.
    Scalar(String),
    /// A nested key/value mapping.
    Map(HashMap<String, ConfigValue>),
}

impl ConfigValue {
    /// Get the scalar string, if this value is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::Scalar(s) => Some(s),
            ConfigValue::Map(_) => None,
        }
    }

    /// Look up a key in a map value. Returns `None` for scalars.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        match self {
            ConfigValue::Scalar(_) => None,
            ConfigValue::Map(m) => m.get(key),
        }
    }

    /// Look up a key in a map value and return its scalar string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ConfigValue::as_str)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::Scalar(s.to_string())
    }
}

/// The kind of a renderable page element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Inline narrative text, or a path to a text asset.
    Text,
    /// A path to an image asset.
    Image,
    /// A free-text puzzle input gate.
    Puzzle,
}

/// One renderable unit of a page.
///
/// Elements are declared first in a page source; their `content` stays unset
/// until the trailing config block binds a value to `variable_name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// What this element renders as.
    pub kind: ElementKind,
    /// Identifier linking the declaration to a config key.
    pub variable_name: String,
    /// Bound value; `None` when no config key matched (renders as a
    /// placeholder).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<ConfigValue>,
}

impl Element {
    /// Create an unbound element.
    pub fn new(kind: ElementKind, variable_name: impl Into<String>) -> Self {
        Self {
            kind,
            variable_name: variable_name.into(),
            content: None,
        }
    }
}
