//! Settings loader
//!
//! Reads one YAML document into a generic string-keyed mapping. Values may be
//! scalars, nested mappings or sequences; key case and sequence order are
//! kept as written. A `Settings` value is built fresh for every decode call
//! and dropped once the entity has been decoded from it.
//!
//! Loading also normalizes the tree before anything else looks at it:
//! - `<<` merge keys are applied, so merged fields are decoded like any other
//! - Number and boolean keys become strings at every depth (`0:` is key `"0"`),
//!   so they are just unknown keys to the decoder
//! - Null, sequence or mapping keys are a parse error at every depth

use serde_yaml::{Mapping, Value};
use std::io::Read;

use crate::error::{DecodeError, Result};

/// Top-level mapping of a loaded document
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    entries: Mapping,
}

impl Settings {
    /// Load settings from a stream, consuming it entirely
    ///
    /// # Errors
    /// Returns [`DecodeError::Parse`] if:
    /// - The stream is not valid YAML
    /// - The document is empty
    /// - A merge key does not refer to a mapping or a list of mappings
    /// - The top level is not a mapping
    /// - Any mapping has a null, sequence or mapping key
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut document: Value =
            serde_yaml::from_reader(reader).map_err(|e| DecodeError::Parse(e.to_string()))?;
        document
            .apply_merge()
            .map_err(|e| DecodeError::Parse(e.to_string()))?;
        Self::from_document(normalize_keys(document)?)
    }

    fn from_document(document: Value) -> Result<Self> {
        let entries = match document {
            Value::Mapping(entries) => entries,
            Value::Null => return Err(DecodeError::Parse("document is empty".to_string())),
            other => {
                return Err(DecodeError::Parse(format!(
                    "expected a mapping at the top level, found {}",
                    describe(&other)
                )));
            }
        };

        Ok(Self { entries })
    }

    /// Value stored under `key`, matched case-sensitively
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// The raw `kind` entry
    pub fn kind(&self) -> Option<&Value> {
        self.get("kind")
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Top-level keys in document order
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().filter_map(Value::as_str)
    }

    /// Hand the mapping over for structural decoding
    pub fn into_value(self) -> Value {
        Value::Mapping(self.entries)
    }
}

impl std::str::FromStr for Settings {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_reader(s.as_bytes())
    }
}

/// Rewrite every mapping key in the tree as a string key
fn normalize_keys(value: Value) -> Result<Value> {
    match value {
        Value::Mapping(mapping) => {
            let mut normalized = Mapping::with_capacity(mapping.len());
            for (key, value) in mapping {
                normalized.insert(Value::String(key_text(key)?), normalize_keys(value)?);
            }
            Ok(Value::Mapping(normalized))
        }
        Value::Sequence(items) => items
            .into_iter()
            .map(normalize_keys)
            .collect::<Result<Vec<_>>>()
            .map(Value::Sequence),
        Value::Tagged(mut tagged) => {
            tagged.value = normalize_keys(tagged.value)?;
            Ok(Value::Tagged(tagged))
        }
        scalar => Ok(scalar),
    }
}

fn key_text(key: Value) -> Result<String> {
    match key {
        Value::String(key) => Ok(key),
        Value::Number(key) => Ok(key.to_string()),
        Value::Bool(key) => Ok(key.to_string()),
        Value::Tagged(tagged) => key_text(tagged.value),
        other => Err(DecodeError::Parse(format!(
            "mapping keys must be scalars, found {}",
            describe(&other)
        ))),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_nested_document() {
        let source = r#"
name: evaluate
kind: template
classification:
  - type: client
    nodes:
      - name: XingYe
        socket: 121.192.123.66:8083
"#;

        let settings: Settings = source.parse().unwrap();
        assert_eq!(settings.len(), 3);
        assert_eq!(settings.get("name"), Some(&Value::from("evaluate")));
        assert_eq!(settings.kind(), Some(&Value::from("template")));

        let classification = settings.get("classification").unwrap();
        let first = &classification.as_sequence().unwrap()[0];
        assert_eq!(first["type"], Value::from("client"));
        assert_eq!(first["nodes"][0]["socket"], Value::from("121.192.123.66:8083"));
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let settings: Settings = "Name: upper\nname: lower\n".parse().unwrap();
        assert_eq!(settings.get("Name"), Some(&Value::from("upper")));
        assert_eq!(settings.get("name"), Some(&Value::from("lower")));
        assert_eq!(settings.get("NAME"), None);
    }

    #[test]
    fn test_key_and_sequence_order_preserved() {
        let settings: Settings = "zeta: 1\nalpha: [c, a, b]\nmid: true\n".parse().unwrap();
        assert_eq!(settings.keys().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);

        let items: Vec<_> = settings
            .get("alpha")
            .unwrap()
            .as_sequence()
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .collect();
        assert_eq!(items, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_from_reader() {
        let source = "kind: pipeline\nsteps: []\n";
        let settings = Settings::from_reader(source.as_bytes()).unwrap();
        assert_eq!(settings.kind().and_then(Value::as_str), Some("pipeline"));
        assert!(!settings.is_empty());
    }

    #[test]
    fn test_malformed_document() {
        let result = "name: [unclosed\nkind: template\n".parse::<Settings>();
        assert!(matches!(result, Err(DecodeError::Parse(_))));
    }

    #[test]
    fn test_stray_sequence_entry() {
        let source = "name: evaluate\nkind: template\n- stray\n";
        assert!(source.parse::<Settings>().unwrap_err().is_parse());
    }

    #[test]
    fn test_empty_document() {
        let result = "".parse::<Settings>();
        assert!(result.unwrap_err().is_parse());

        let result = "# only a comment\n".parse::<Settings>();
        assert!(result.unwrap_err().is_parse());
    }

    #[test]
    fn test_top_level_must_be_mapping() {
        let err = "- a\n- b\n".parse::<Settings>().unwrap_err();
        assert!(err.is_parse());
        assert!(err.to_string().contains("a sequence"));

        let err = "just a string".parse::<Settings>().unwrap_err();
        assert!(err.to_string().contains("a string"));
    }

    #[test]
    fn test_scalar_keys_become_strings() {
        let settings: Settings = "1: one\ntrue: yes\nkind: template\n".parse().unwrap();
        assert_eq!(settings.get("1"), Some(&Value::from("one")));
        assert_eq!(settings.get("true"), Some(&Value::from("yes")));
        assert_eq!(settings.keys().collect::<Vec<_>>(), vec!["1", "true", "kind"]);
    }

    #[test]
    fn test_nested_scalar_keys_become_strings() {
        let settings: Settings = "steps:\n  - {0: s, name: a}\n".parse().unwrap();
        let step = &settings.get("steps").unwrap()[0];
        assert_eq!(step["0"], Value::from("s"));
        assert_eq!(step["name"], Value::from("a"));
    }

    #[test]
    fn test_collection_keys_are_parse_errors() {
        let err = "? [a, b]\n: pair\n".parse::<Settings>().unwrap_err();
        assert!(err.is_parse());
        assert!(err.to_string().contains("keys must be scalars"));

        let nested = "steps:\n  - ? {a: 1}\n    : x\n".parse::<Settings>().unwrap_err();
        assert!(nested.is_parse());

        let null_key = "~: nothing\nkind: template\n".parse::<Settings>().unwrap_err();
        assert!(null_key.is_parse());
    }

    #[test]
    fn test_merge_keys_are_applied() {
        let source = r#"
defaults: &defaults
  template: tmp1
  description: shared
works:
  - <<: *defaults
    name: task1/1
    description: own
"#;
        let settings: Settings = source.parse().unwrap();
        let work = &settings.get("works").unwrap()[0];
        assert_eq!(work["template"], Value::from("tmp1"));
        assert_eq!(work["name"], Value::from("task1/1"));
        assert_eq!(work["description"], Value::from("own"));
        assert!(work.get("<<").is_none());
    }

    #[test]
    fn test_merge_of_scalar_is_parse_error() {
        let err = "works:\n  - <<: 3\n    name: a\n".parse::<Settings>().unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn test_into_value_is_mapping() {
        let settings: Settings = "name: x\n".parse().unwrap();
        assert!(settings.into_value().is_mapping());
    }
}
