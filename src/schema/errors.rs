//! Schema validation error types
//!
//! A rejected document produces one `ValidationError` listing every field
//! that failed, so callers can fix a payload in a single round trip.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Category of a single field failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Required field absent
    Missing,
    /// Explicit null on a non-nullable field
    Null,
    /// Value has the wrong JSON type
    TypeMismatch,
    /// Value is not one of the allowed literals
    NotInEnum,
    /// Numeric value outside its bounds
    OutOfRange,
    /// String is not an absolute http/https URL
    MalformedUrl,
    /// Required text is empty
    Empty,
}

impl ViolationKind {
    /// Stable code exposed to API clients
    pub fn code(&self) -> &'static str {
        match self {
            ViolationKind::Missing => "missing",
            ViolationKind::Null => "null",
            ViolationKind::TypeMismatch => "type_mismatch",
            ViolationKind::NotInEnum => "not_in_enum",
            ViolationKind::OutOfRange => "out_of_range",
            ViolationKind::MalformedUrl => "malformed_url",
            ViolationKind::Empty => "empty",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Validation failure details for one field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    /// Field path (e.g., "images[2]")
    pub field: String,
    /// What went wrong
    pub kind: ViolationKind,
    /// Expected type or condition
    pub expected: String,
    /// Actual value or type found
    pub actual: String,
}

impl FieldViolation {
    pub fn new(
        field: impl Into<String>,
        kind: ViolationKind,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            kind,
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::new(field, ViolationKind::Missing, "field to be present", "missing")
    }

    pub fn null_value(field: impl Into<String>) -> Self {
        Self::new(field, ViolationKind::Null, "non-null value", "null")
    }

    pub fn type_mismatch(field: impl Into<String>, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::new(field, ViolationKind::TypeMismatch, expected, actual)
    }

    pub fn not_in_enum(field: impl Into<String>, allowed: &[&str], actual: impl Into<String>) -> Self {
        Self::new(
            field,
            ViolationKind::NotInEnum,
            format!("one of {}", allowed.join(", ")),
            actual,
        )
    }

    pub fn out_of_range(field: impl Into<String>, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::new(field, ViolationKind::OutOfRange, expected, actual)
    }

    pub fn malformed_url(field: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::new(field, ViolationKind::MalformedUrl, "absolute http or https URL", actual)
    }

    pub fn empty(field: impl Into<String>) -> Self {
        Self::new(field, ViolationKind::Empty, "non-empty text", "empty string")
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field '{}': expected {}, got {}", self.field, self.expected, self.actual)
    }
}

/// A document rejected by its schema. Never empty.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{collection} rejected: {}", summarize(.violations))]
pub struct ValidationError {
    /// Collection the document was destined for
    pub collection: String,
    /// Every failed field, in schema declaration order
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn new(collection: impl Into<String>, violations: Vec<FieldViolation>) -> Self {
        debug_assert!(!violations.is_empty());
        Self {
            collection: collection.into(),
            violations,
        }
    }

    pub fn single(collection: impl Into<String>, violation: FieldViolation) -> Self {
        Self::new(collection, vec![violation])
    }

    /// Returns the violation reported for `field`, if any
    pub fn violation(&self, field: &str) -> Option<&FieldViolation> {
        self.violations.iter().find(|v| v.field == field)
    }
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, ValidationError>;
