//! Field validation errors.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-field validation messages. The first message for a field wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    /// Empty set of errors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_insert_with(|| message.into());
    }

    /// Add every error of `other` for fields that have none yet.
    pub fn merge(&mut self, other: Self) {
        for (field, message) in other.0 {
            self.0.entry(field).or_insert(message);
        }
    }

    /// Returns true if no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Message recorded for a field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Number of failed fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over `(field, message)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_message_wins() {
        let mut errors = ValidationErrors::new();
        errors.add("fee_amount", "first");
        errors.add("fee_amount", "second");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("fee_amount"), Some("first"));
    }

    #[test]
    fn merge_keeps_existing_messages() {
        let mut errors = ValidationErrors::new();
        errors.add("payment_method", "pick one");
        let mut other = ValidationErrors::new();
        other.add("payment_method", "ignored");
        other.add("fee_amount", "missing");

        errors.merge(other);

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("payment_method"), Some("pick one"));
        assert_eq!(errors.get("fee_amount"), Some("missing"));
    }

    #[test]
    fn serializes_as_map() {
        let mut errors = ValidationErrors::new();
        errors.add("b", "2");
        errors.add("a", "1");
        assert_eq!(serde_json::to_string(&errors).unwrap(), r#"{"a":"1","b":"2"}"#);
    }
}
