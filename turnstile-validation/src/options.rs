// Per-rule options consumed by checks

use std::collections::BTreeMap;

/// A single option value.
///
/// Checks read the variant they expect; when the key is absent or holds a
/// different variant, the check falls back to its documented default (or
/// reports its documented configuration failure) instead of crashing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Str(String),
    Int(i64),
    List(Vec<String>),
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Str(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Str(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Int(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        OptionValue::Int(value as i64)
    }
}

impl From<u32> for OptionValue {
    fn from(value: u32) -> Self {
        OptionValue::Int(value as i64)
    }
}

impl From<usize> for OptionValue {
    fn from(value: usize) -> Self {
        OptionValue::Int(value as i64)
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(values: Vec<String>) -> Self {
        OptionValue::List(values)
    }
}

impl From<&[&str]> for OptionValue {
    fn from(values: &[&str]) -> Self {
        OptionValue::List(values.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for OptionValue {
    fn from(values: [&str; N]) -> Self {
        OptionValue::List(values.iter().map(|s| s.to_string()).collect())
    }
}

/// Parameters a rule hands to its check (a length bound, a regex pattern,
/// extra date layouts).
///
/// Presence of a key is distinguishable from the key holding a zero or empty
/// value: `get` and `contains` see the raw variant, while the typed getters
/// answer `None` both for an absent key and for a wrong-typed one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    values: BTreeMap<String, OptionValue>,
}

impl Options {
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Raw variant for a key, if present.
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.values.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// String value for a key; `None` when absent or not a string.
    pub fn str(&self, key: &str) -> Option<&str> {
        match self.values.get(key) {
            Some(OptionValue::Str(value)) => Some(value),
            _ => None,
        }
    }

    /// Integer value for a key; `None` when absent or not an integer.
    pub fn int(&self, key: &str) -> Option<i64> {
        match self.values.get(key) {
            Some(OptionValue::Int(value)) => Some(*value),
            _ => None,
        }
    }

    /// String-list value for a key; `None` when absent or not a list.
    pub fn list(&self, key: &str) -> Option<&[String]> {
        match self.values.get(key) {
            Some(OptionValue::List(values)) => Some(values),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_getters() {
        let options = Options::new()
            .with("length", 5)
            .with("pattern", "^a+$")
            .with("formats", ["%Y/%m/%d"]);

        assert_eq!(options.int("length"), Some(5));
        assert_eq!(options.str("pattern"), Some("^a+$"));
        assert_eq!(options.list("formats"), Some(&["%Y/%m/%d".to_string()][..]));
    }

    #[test]
    fn test_absent_key_returns_none() {
        let options = Options::new();

        assert_eq!(options.int("length"), None);
        assert!(!options.contains("length"));
    }

    #[test]
    fn test_wrong_variant_returns_none_but_key_is_present() {
        let options = Options::new().with("length", "five");

        assert_eq!(options.int("length"), None);
        assert!(options.contains("length"));
        assert_eq!(
            options.get("length"),
            Some(&OptionValue::Str("five".to_string()))
        );
    }

    #[test]
    fn test_zero_is_distinguishable_from_absent() {
        let options = Options::new().with("length", 0);

        assert_eq!(options.int("length"), Some(0));
        assert!(options.contains("length"));
    }

    #[test]
    fn test_set_replaces() {
        let mut options = Options::new().with("length", 1);
        options.set("length", 2);

        assert_eq!(options.int("length"), Some(2));
        assert_eq!(options.len(), 1);
    }
}
