//! # Exact-match document filters
//!
//! A filter is a conjunction of `field == value` conditions. An empty filter
//! matches every document.

use serde_json::{Map, Value};

/// Conjunction of equality conditions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentFilter {
    conditions: Vec<(String, Value)>,
}

impl DocumentFilter {
    /// Create a filter that matches everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an equality condition
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.conditions.push((field.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Conditions in insertion order
    pub fn conditions(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.conditions.iter().map(|(f, v)| (f.as_str(), v))
    }

    /// Check if a document matches every condition
    pub fn matches(&self, doc: &Map<String, Value>) -> bool {
        self.conditions
            .iter()
            .all(|(field, expected)| doc.get(field) == Some(expected))
    }
}
