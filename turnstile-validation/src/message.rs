// Aggregated validation failures

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Failure reasons grouped by field.
///
/// Reasons for a field keep the order the rules were declared in. A field
/// with no failures has no entry; the map never holds an empty list. Equality
/// is structural: same fields, same ordered reasons.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Message {
    fields: BTreeMap<String, Vec<String>>,
}

impl Message {
    pub fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Append a failure reason for a field, creating the entry if absent.
    pub fn add(&mut self, field: impl Into<String>, reason: impl Into<String>) {
        self.fields
            .entry(field.into())
            .or_default()
            .push(reason.into());
    }

    /// Whether the field accumulated any failures.
    pub fn contains_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Failure reasons for a field, in rule-declaration order. Empty when the
    /// field had no failures.
    pub fn reasons(&self, field: &str) -> &[String] {
        self.fields
            .get(field)
            .map(|reasons| reasons.as_slice())
            .unwrap_or(&[])
    }

    /// Iterate the failed fields.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Iterate `(field, reasons)` entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields
            .iter()
            .map(|(field, reasons)| (field.as_str(), reasons.as_slice()))
    }

    /// Number of fields with at least one failure.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Total failure count across all fields.
    pub fn total(&self) -> usize {
        self.fields.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The standard failure payload: `{"errors": {"<field>": ["<reason>", ...]}}`.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "errors": self.fields })
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (field, reasons) in &self.fields {
            for reason in reasons {
                writeln!(f, "{}: {}", field, reason)?;
            }
        }
        Ok(())
    }
}
