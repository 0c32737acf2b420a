//! Passthrough display options forwarded to the `<img>` element

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// Attributes the component sets itself; callers cannot supply them
pub const RESERVED_ATTRIBUTES: [&str; 4] = ["src", "alt", "onerror", "onload"];

/// Opaque bag of display attributes (sizing, styling, loading hints...)
///
/// Values are forwarded untouched. Keys matching [`RESERVED_ATTRIBUTES`]
/// (case-insensitive) are dropped on insertion, as are malformed names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct DisplayOptions {
    attributes: BTreeMap<String, String>,
}

impl DisplayOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute. Returns `false` if the key is reserved or not a
    /// usable attribute name.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        if is_reserved(&key) {
            warn!("Dropping reserved image attribute: {}", key);
            return false;
        }
        if !is_attribute_name(&key) {
            warn!("Dropping malformed image attribute name: {:?}", key);
            return false;
        }
        self.attributes.insert(key, value.into());
        true
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

fn is_reserved(key: &str) -> bool {
    RESERVED_ATTRIBUTES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(key))
}

fn is_attribute_name(key: &str) -> bool {
    !key.is_empty()
        && !key.chars().any(|c| {
            c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
        })
}

impl<K, V> FromIterator<(K, V)> for DisplayOptions
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = DisplayOptions::new();
        for (k, v) in iter {
            options.insert(k, v);
        }
        options
    }
}

impl From<BTreeMap<String, String>> for DisplayOptions {
    fn from(map: BTreeMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

impl From<DisplayOptions> for BTreeMap<String, String> {
    fn from(options: DisplayOptions) -> Self {
        options.attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_keys_are_dropped() {
        let mut options = DisplayOptions::new();
        assert!(!options.insert("onError", "alert(1)"));
        assert!(!options.insert("SRC", "https://elsewhere.example/x.png"));
        assert!(options.insert("width", "640"));

        assert_eq!(options.len(), 1);
        assert_eq!(options.get("width"), Some("640"));
    }

    #[test]
    fn test_malformed_names_are_dropped() {
        let mut options = DisplayOptions::new();
        assert!(!options.insert("", "x"));
        assert!(!options.insert("a b", "x"));
        assert!(!options.insert("x\"><script", "x"));
        assert!(options.insert("data-test-id", "hero"));
        assert_eq!(options.len(), 1);
    }

    #[test]
    fn test_collect_from_pairs() {
        let options: DisplayOptions =
            [("class", "rounded"), ("onerror", "x"), ("height", "480")]
                .into_iter()
                .collect();

        let keys: Vec<&str> = options.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["class", "height"]);
    }

    #[test]
    fn test_deserialize_from_flat_map() {
        let options: DisplayOptions = serde_json::from_str(
            r#"{"style":"object-fit: cover","loading":"lazy","onError":"x"}"#,
        )
        .unwrap();

        assert_eq!(options.len(), 2);
        assert_eq!(options.get("loading"), Some("lazy"));
        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            serde_json::json!({"style": "object-fit: cover", "loading": "lazy"})
        );
    }
}
