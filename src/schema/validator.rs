//! Schema validator for incoming documents
//!
//! Validation semantics:
//! - All required fields are present and non-null
//! - Field types match schema types (no string-to-number coercion)
//! - Enum, range, URL and non-empty constraints hold
//! - Absent optional fields receive their default (or `null`)
//! - Undeclared fields are dropped from the output
//!
//! Validation is all-or-nothing and reports every failing field.

use serde_json::{Map, Value};
use url::Url;

use super::errors::{FieldViolation, SchemaResult, ValidationError};
use super::types::{FieldDef, FieldType, Schema};

/// Schema validator that turns an untyped document into a fully populated record.
///
/// Validator does not mutate its input.
/// Validation is deterministic.
pub struct SchemaValidator<'a> {
    schema: &'a Schema,
}

impl<'a> SchemaValidator<'a> {
    /// Creates a new validator for the given schema.
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Validates a document against the schema.
    ///
    /// On success the returned map holds exactly the declared fields, with
    /// defaults applied. On failure every violated field is reported.
    pub fn validate(&self, document: &Value) -> SchemaResult<Map<String, Value>> {
        let doc_obj = document.as_object().ok_or_else(|| {
            ValidationError::single(
                &self.schema.collection,
                FieldViolation::type_mismatch("$root", "object", json_type_name(document)),
            )
        })?;

        let mut violations = Vec::new();
        let mut record = Map::new();

        for (field_name, field_def) in self.schema.fields() {
            match doc_obj.get(field_name) {
                None if field_def.required => {
                    violations.push(FieldViolation::missing_field(field_name));
                }
                None => {
                    let value = field_def.default.clone().unwrap_or(Value::Null);
                    record.insert(field_name.to_string(), value);
                }
                Some(Value::Null) if field_def.nullable => {
                    record.insert(field_name.to_string(), Value::Null);
                }
                Some(Value::Null) => {
                    violations.push(FieldViolation::null_value(field_name));
                }
                Some(value) => {
                    let before = violations.len();
                    check_value(value, &field_def.field_type, field_name, &mut violations);
                    if violations.len() == before {
                        check_constraints(value, field_def, field_name, &mut violations);
                    }
                    if violations.len() == before {
                        record.insert(field_name.to_string(), value.clone());
                    }
                }
            }
        }

        if violations.is_empty() {
            Ok(record)
        } else {
            Err(ValidationError::new(&self.schema.collection, violations))
        }
    }
}

/// Checks a value against a field type, appending one violation per bad element.
fn check_value(value: &Value, expected: &FieldType, path: &str, violations: &mut Vec<FieldViolation>) {
    match expected {
        FieldType::String => {
            if !value.is_string() {
                violations.push(type_error(path, expected, value));
            }
        }
        FieldType::Int => {
            // Must be an integer (not a float)
            if value.as_i64().is_none() {
                violations.push(type_error(path, expected, value));
            }
        }
        FieldType::Float => {
            // Accept both integers and floats as float
            if !value.is_number() {
                violations.push(type_error(path, expected, value));
            }
        }
        FieldType::Bool => {
            if !value.is_boolean() {
                violations.push(type_error(path, expected, value));
            }
        }
        FieldType::Url => match value.as_str() {
            Some(raw) if is_http_url(raw) => {}
            Some(raw) => violations.push(FieldViolation::malformed_url(path, raw)),
            None => violations.push(type_error(path, expected, value)),
        },
        FieldType::Enum(allowed) => match value.as_str() {
            Some(literal) if allowed.contains(&literal) => {}
            Some(literal) => violations.push(FieldViolation::not_in_enum(path, allowed, literal)),
            None => violations.push(type_error(path, expected, value)),
        },
        FieldType::Array(element_type) => {
            let Some(arr) = value.as_array() else {
                violations.push(type_error(path, expected, value));
                return;
            };
            for (i, elem) in arr.iter().enumerate() {
                let elem_path = format!("{}[{}]", path, i);
                if elem.is_null() {
                    violations.push(FieldViolation::null_value(elem_path));
                    continue;
                }
                check_value(elem, element_type, &elem_path, violations);
            }
        }
    }
}

/// Checks range and content constraints on a value whose type already matched.
fn check_constraints(value: &Value, def: &FieldDef, path: &str, violations: &mut Vec<FieldViolation>) {
    let constraints = &def.constraints;

    if constraints.non_empty {
        if let Some(text) = value.as_str() {
            if text.trim().is_empty() {
                violations.push(FieldViolation::empty(path));
            }
        }
    }

    if let Some(number) = value.as_f64() {
        let below = constraints.min.is_some_and(|min| number < min);
        let above = constraints.max.is_some_and(|max| number > max);
        if below || above {
            violations.push(FieldViolation::out_of_range(
                path,
                describe_bounds(constraints.min, constraints.max),
                value.to_string(),
            ));
        }
    }
}

fn describe_bounds(min: Option<f64>, max: Option<f64>) -> String {
    match (min, max) {
        (Some(min), Some(max)) => format!("between {} and {}", min, max),
        (Some(min), None) => format!("at least {}", min),
        (None, Some(max)) => format!("at most {}", max),
        (None, None) => "any value".to_string(),
    }
}

/// Absolute URL with an http(s) scheme and a host.
fn is_http_url(raw: &str) -> bool {
    match Url::parse(raw) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host_str().is_some_and(|h| !h.is_empty()),
        Err(_) => false,
    }
}

/// Returns the JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Creates a type mismatch violation.
fn type_error(path: &str, expected: &FieldType, actual: &Value) -> FieldViolation {
    FieldViolation::type_mismatch(path, expected.type_name(), json_type_name(actual))
}

#[cfg(test)]
mod tests {
    use super::super::errors::ViolationKind;
    use super::*;
    use serde_json::json;

    const COLORS: &[&str] = &["red", "green"];

    fn listing_schema() -> Schema {
        Schema::new("listing")
            .field("title", FieldDef::required_string().non_empty())
            .field("note", FieldDef::optional_string())
            .field("color", FieldDef::required(FieldType::Enum(COLORS)))
            .field("score", FieldDef::required(FieldType::Int).between(1.0, 5.0))
            .field("price", FieldDef::optional(FieldType::Float).at_least(0.0))
            .field(
                "links",
                FieldDef::with_default(FieldType::array_of(FieldType::Url), json!([])),
            )
            .field("pinned", FieldDef::with_default(FieldType::Bool, json!(false)))
    }

    fn valid_doc() -> Value {
        json!({
            "title": "Loft",
            "color": "red",
            "score": 3
        })
    }

    #[test]
    fn test_valid_document_gets_defaults() {
        let schema = listing_schema();
        let record = SchemaValidator::new(&schema).validate(&valid_doc()).unwrap();

        assert_eq!(record["title"], "Loft");
        assert_eq!(record["note"], Value::Null);
        assert_eq!(record["price"], Value::Null);
        assert_eq!(record["links"], json!([]));
        assert_eq!(record["pinned"], json!(false));
        assert_eq!(record.len(), 7);
    }

    #[test]
    fn test_undeclared_fields_dropped() {
        let schema = listing_schema();
        let mut doc = valid_doc();
        doc["_id"] = json!("forged");
        doc["id"] = json!("forged");
        doc["extra"] = json!(1);

        let record = SchemaValidator::new(&schema).validate(&doc).unwrap();
        assert!(!record.contains_key("_id"));
        assert!(!record.contains_key("id"));
        assert!(!record.contains_key("extra"));
    }

    #[test]
    fn test_every_violation_reported() {
        let schema = listing_schema();
        let doc = json!({
            "title": "  ",
            "color": "blue",
            "score": 9,
            "price": -1,
            "links": ["ftp://files.example.com/a.png", "https://example.com/b.png", 3]
        });

        let err = SchemaValidator::new(&schema).validate(&doc).unwrap_err();
        assert_eq!(err.collection, "listing");
        assert_eq!(err.violation("title").unwrap().kind, ViolationKind::Empty);
        assert_eq!(err.violation("color").unwrap().kind, ViolationKind::NotInEnum);
        assert_eq!(err.violation("score").unwrap().kind, ViolationKind::OutOfRange);
        assert_eq!(err.violation("price").unwrap().kind, ViolationKind::OutOfRange);
        assert_eq!(err.violation("links[0]").unwrap().kind, ViolationKind::MalformedUrl);
        assert_eq!(err.violation("links[2]").unwrap().kind, ViolationKind::TypeMismatch);
        assert!(err.violation("links[1]").is_none());
        assert_eq!(err.violations.len(), 6);
    }

    #[test]
    fn test_missing_required_fields() {
        let schema = listing_schema();
        let err = SchemaValidator::new(&schema).validate(&json!({})).unwrap_err();

        let missing: Vec<_> = err.violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(missing, vec!["title", "color", "score"]);
        assert!(err.violations.iter().all(|v| v.kind == ViolationKind::Missing));
    }

    #[test]
    fn test_null_only_for_nullable_fields() {
        let schema = listing_schema();
        let mut doc = valid_doc();
        doc["note"] = Value::Null;
        doc["price"] = Value::Null;
        assert!(SchemaValidator::new(&schema).validate(&doc).is_ok());

        doc["links"] = Value::Null;
        doc["pinned"] = Value::Null;
        doc["title"] = Value::Null;
        let err = SchemaValidator::new(&schema).validate(&doc).unwrap_err();
        assert_eq!(err.violations.len(), 3);
        assert!(err.violations.iter().all(|v| v.kind == ViolationKind::Null));
    }

    #[test]
    fn test_int_rejects_float_and_string() {
        let schema = listing_schema();
        let validator = SchemaValidator::new(&schema);

        let mut doc = valid_doc();
        doc["score"] = json!(3.5);
        let err = validator.validate(&doc).unwrap_err();
        assert_eq!(err.violation("score").unwrap().actual, "float");

        doc["score"] = json!("3");
        let err = validator.validate(&doc).unwrap_err();
        assert_eq!(err.violation("score").unwrap().actual, "string");
    }

    #[test]
    fn test_float_accepts_integers() {
        let schema = listing_schema();
        let mut doc = valid_doc();
        doc["price"] = json!(100);
        assert!(SchemaValidator::new(&schema).validate(&doc).is_ok());

        doc["price"] = json!(99.5);
        assert!(SchemaValidator::new(&schema).validate(&doc).is_ok());
    }

    #[test]
    fn test_range_bounds_inclusive() {
        let schema = listing_schema();
        let validator = SchemaValidator::new(&schema);
        for score in [1, 5] {
            let mut doc = valid_doc();
            doc["score"] = json!(score);
            assert!(validator.validate(&doc).is_ok(), "score {} rejected", score);
        }
        for score in [0, 6] {
            let mut doc = valid_doc();
            doc["score"] = json!(score);
            assert!(validator.validate(&doc).is_err(), "score {} accepted", score);
        }
    }

    #[test]
    fn test_non_object_root_rejected() {
        let schema = listing_schema();
        let err = SchemaValidator::new(&schema).validate(&json!([1, 2])).unwrap_err();
        let violation = err.violation("$root").unwrap();
        assert_eq!(violation.expected, "object");
        assert_eq!(violation.actual, "array");
    }

    #[test]
    fn test_url_requires_host() {
        assert!(is_http_url("https://example.com/a.jpg"));
        assert!(is_http_url("http://localhost:8080/img"));
        assert!(!is_http_url("https://"));
        assert!(!is_http_url("not a url"));
        assert!(!is_http_url("mailto:someone@example.com"));
        assert!(!is_http_url("/relative/path.png"));
    }

    #[test]
    fn test_validation_is_deterministic() {
        let schema = listing_schema();
        let validator = SchemaValidator::new(&schema);
        let doc = json!({ "color": 1, "score": "x" });
        let first = validator.validate(&doc).unwrap_err();
        for _ in 0..10 {
            assert_eq!(validator.validate(&doc).unwrap_err(), first);
        }
    }
}
