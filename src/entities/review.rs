//! Customer reviews

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::Entity;
use crate::schema::{FieldDef, FieldType, Schema};

/// Lowest and highest accepted rating
pub const RATING_RANGE: (i64, i64) = (1, 5);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Reviewer name
    pub name: String,
    /// Rating out of 5
    pub rating: i64,
    pub comment: String,
}

impl Entity for Review {
    const COLLECTION: &'static str = "review";

    fn schema() -> &'static Schema {
        static SCHEMA: OnceLock<Schema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            let (min, max) = RATING_RANGE;
            Schema::new(Self::COLLECTION)
                .field("name", FieldDef::required_string())
                .field(
                    "rating",
                    FieldDef::required(FieldType::Int).between(min as f64, max as f64),
                )
                .field("comment", FieldDef::required_string())
                .checked()
        })
    }
}
