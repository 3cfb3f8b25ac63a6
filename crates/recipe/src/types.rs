use serde::{Deserialize, Serialize};
use validator::Validate;

/// Catalog entry. Never mutated once the catalog is loaded.
#[derive(Validate, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Recipe {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[validate(length(min = 1))]
    pub ingredients: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<String>,
}

impl Recipe {
    pub fn new<I, S>(name: impl Into<String>, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            ingredients: ingredients.into_iter().map(Into::into).collect(),
            time: None,
            difficulty: None,
            steps: vec![],
        }
    }
}
