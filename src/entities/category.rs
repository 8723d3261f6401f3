//! Property category enumeration

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of real estate a property (or an inquiry's interest) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Residential,
    Commercial,
    Industrial,
    Land,
}

impl Category {
    /// Wire literals, in declaration order
    pub const NAMES: &'static [&'static str] = &["residential", "commercial", "industrial", "land"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Residential => "residential",
            Category::Commercial => "commercial",
            Category::Industrial => "industrial",
            Category::Land => "land",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "residential" => Ok(Category::Residential),
            "commercial" => Ok(Category::Commercial),
            "industrial" => Ok(Category::Industrial),
            "land" => Ok(Category::Land),
            other => Err(format!("unknown category '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_serde() {
        for name in Category::NAMES {
            let category: Category = name.parse().unwrap();
            assert_eq!(category.as_str(), *name);
            assert_eq!(serde_json::to_value(category).unwrap(), *name);
        }
    }

    #[test]
    fn test_unknown_category_rejected() {
        assert!("Residential".parse::<Category>().is_err());
        assert!("farm".parse::<Category>().is_err());
        assert!(serde_json::from_str::<Category>("\"farm\"").is_err());
    }
}
