//! Form Input
//!
//! Field values keyed by field name, owned by one controller for the
//! lifetime of a page view.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Mapping from field name to its current string value
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormInput {
    fields: BTreeMap<String, String>,
}

impl FormInput {
    /// Create with every named field present and empty
    pub fn with_fields(names: &[&str]) -> Self {
        Self {
            fields: names
                .iter()
                .map(|name| ((*name).to_string(), String::new()))
                .collect(),
        }
    }

    /// Current value of a field (empty if never set)
    pub fn get(&self, name: &str) -> &str {
        self.fields.get(name).map_or("", String::as_str)
    }

    /// Store a value. Unknown names are kept as-is.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    /// True when the field is missing or only whitespace
    pub fn is_blank(&self, name: &str) -> bool {
        self.get(name).trim().is_empty()
    }

    /// Reset every field to the empty string
    pub fn clear(&mut self) {
        for value in self.fields.values_mut() {
            value.clear();
        }
    }

    /// True when no field holds a value
    pub fn is_empty(&self) -> bool {
        self.fields.values().all(String::is_empty)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormInput {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_defaults_to_empty() {
        let input = FormInput::with_fields(&["name"]);
        assert_eq!(input.get("name"), "");
        assert_eq!(input.get("missing"), "");
        assert!(input.is_blank("missing"));
    }

    #[test]
    fn test_clear_keeps_field_names() {
        let mut input: FormInput = [("name", "Ada"), ("email", "ada@example.com")]
            .into_iter()
            .collect();
        input.clear();

        assert!(input.is_empty());
        assert_eq!(input.iter().count(), 2);
    }

    #[test]
    fn test_deserializes_from_json_object() {
        let input: FormInput =
            serde_json::from_str(r#"{"url": "example.com", "extra": ""}"#).unwrap();
        assert_eq!(input.get("url"), "example.com");
        assert!(input.is_blank("extra"));
    }
}
