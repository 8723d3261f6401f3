//! Property listings

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{Category, Entity};
use crate::schema::{FieldDef, FieldType, Schema};

/// A property listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub title: String,
    pub description: Option<String>,
    pub category: Category,
    /// Listing price, never negative
    pub price: Option<f64>,
    /// City or area
    pub location: String,
    /// Image URLs, in display order
    pub images: Vec<String>,
    pub amenities: Vec<String>,
    /// Shown on the homepage carousel
    pub featured: bool,
}

impl Entity for Property {
    const COLLECTION: &'static str = "property";

    fn schema() -> &'static Schema {
        static SCHEMA: OnceLock<Schema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::new(Self::COLLECTION)
                .field("title", FieldDef::required_string().non_empty())
                .field("description", FieldDef::optional_string())
                .field("category", FieldDef::required(FieldType::Enum(Category::NAMES)))
                .field("price", FieldDef::optional(FieldType::Float).at_least(0.0))
                .field("location", FieldDef::required_string())
                .field(
                    "images",
                    FieldDef::with_default(FieldType::array_of(FieldType::Url), json!([])),
                )
                .field(
                    "amenities",
                    FieldDef::with_default(FieldType::array_of(FieldType::String), json!([])),
                )
                .field("featured", FieldDef::with_default(FieldType::Bool, json!(false)))
                .checked()
        })
    }
}
