//! Contact inquiries

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::{Category, Entity};
use crate::schema::{FieldDef, FieldType, Schema};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inquiry {
    /// Full name
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    /// Kind of property the sender is interested in
    pub interest_category: Option<Category>,
}

impl Entity for Inquiry {
    const COLLECTION: &'static str = "inquiry";

    fn schema() -> &'static Schema {
        static SCHEMA: OnceLock<Schema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::new(Self::COLLECTION)
                .field("name", FieldDef::required_string())
                .field("email", FieldDef::required_string())
                .field("phone", FieldDef::optional_string())
                .field("message", FieldDef::required_string())
                .field(
                    "interest_category",
                    FieldDef::optional(FieldType::Enum(Category::NAMES)),
                )
                .checked()
        })
    }
}
