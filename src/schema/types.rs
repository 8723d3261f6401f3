//! Schema type definitions
//!
//! Supported types:
//! - string: UTF-8 string
//! - int: 64-bit signed integer
//! - float: 64-bit floating point (integers accepted)
//! - bool: Boolean
//! - url: absolute http/https URL, stored as the submitted string
//! - enum: one of a fixed set of string literals
//! - array: homogeneous array with element type

use serde_json::Value;

/// Field names that belong to the store and may never be declared by a schema.
pub const RESERVED_FIELDS: [&str; 2] = ["_id", "id"];

/// Supported field types
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// 64-bit signed integer
    Int,
    /// 64-bit floating point
    Float,
    /// Boolean
    Bool,
    /// Absolute http/https URL
    Url,
    /// One of a fixed set of literals
    Enum(&'static [&'static str]),
    /// Homogeneous array with single element type
    Array(Box<FieldType>),
}

impl FieldType {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Int => "int",
            FieldType::Float => "float",
            FieldType::Bool => "bool",
            FieldType::Url => "url",
            FieldType::Enum(_) => "enum",
            FieldType::Array(_) => "array",
        }
    }

    /// Shorthand for an array of `element`.
    pub fn array_of(element: FieldType) -> Self {
        FieldType::Array(Box::new(element))
    }
}

/// Value constraints checked after the type matches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Constraints {
    /// Inclusive lower bound for numeric fields
    pub min: Option<f64>,
    /// Inclusive upper bound for numeric fields
    pub max: Option<f64>,
    /// Strings must contain a non-whitespace character
    pub non_empty: bool,
}

/// Field definition
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    /// Field data type
    pub field_type: FieldType,
    /// Whether field must be present
    pub required: bool,
    /// Whether an explicit `null` is accepted
    pub nullable: bool,
    /// Value stored when the field is absent
    pub default: Option<Value>,
    /// Range and content constraints
    pub constraints: Constraints,
}

impl FieldDef {
    /// A field that must be present and non-null.
    pub fn required(field_type: FieldType) -> Self {
        Self {
            field_type,
            required: true,
            nullable: false,
            default: None,
            constraints: Constraints::default(),
        }
    }

    /// A field that may be absent or null; stored as `null` when absent.
    pub fn optional(field_type: FieldType) -> Self {
        Self {
            field_type,
            required: false,
            nullable: true,
            default: None,
            constraints: Constraints::default(),
        }
    }

    /// A field that may be absent, in which case `default` is stored.
    /// Explicit `null` is rejected.
    pub fn with_default(field_type: FieldType, default: Value) -> Self {
        Self {
            field_type,
            required: false,
            nullable: false,
            default: Some(default),
            constraints: Constraints::default(),
        }
    }

    /// Create a required string field
    pub fn required_string() -> Self {
        Self::required(FieldType::String)
    }

    /// Create an optional string field
    pub fn optional_string() -> Self {
        Self::optional(FieldType::String)
    }

    /// Require at least one non-whitespace character.
    pub fn non_empty(mut self) -> Self {
        self.constraints.non_empty = true;
        self
    }

    /// Inclusive lower bound.
    pub fn at_least(mut self, min: f64) -> Self {
        self.constraints.min = Some(min);
        self
    }

    /// Inclusive bounds.
    pub fn between(mut self, min: f64, max: f64) -> Self {
        self.constraints.min = Some(min);
        self.constraints.max = Some(max);
        self
    }
}

/// Schema for one collection. Fields are validated in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    /// Collection the validated records are written to
    pub collection: String,
    /// Field definitions, in declaration order
    fields: Vec<(String, FieldDef)>,
}

impl Schema {
    /// Create an empty schema for `collection`
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            fields: Vec::new(),
        }
    }

    /// Declare a field
    pub fn field(mut self, name: impl Into<String>, def: FieldDef) -> Self {
        self.fields.push((name.into(), def));
        self
    }

    /// Declared fields, in order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldDef)> {
        self.fields.iter().map(|(name, def)| (name.as_str(), def))
    }

    /// Validates the schema structure itself (not a document)
    pub fn validate_structure(&self) -> Result<(), String> {
        for (i, (name, def)) in self.fields.iter().enumerate() {
            if RESERVED_FIELDS.contains(&name.as_str()) {
                return Err(format!("'{}' is assigned by the store and cannot be declared", name));
            }
            if self.fields[..i].iter().any(|(earlier, _)| earlier == name) {
                return Err(format!("field '{}' declared twice", name));
            }
            if def.required && def.default.is_some() {
                return Err(format!("required field '{}' cannot carry a default", name));
            }
        }
        Ok(())
    }

    /// Finishes a static schema table; a malformed table trips in debug builds.
    pub fn checked(self) -> Self {
        debug_assert!(
            self.validate_structure().is_ok(),
            "malformed schema for {}: {:?}",
            self.collection,
            self.validate_structure()
        );
        self
    }
}
