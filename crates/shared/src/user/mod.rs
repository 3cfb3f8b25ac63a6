use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    Display,
    AsRefStr,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Feedback {
    Like,
    Dislike,
}

/// How an allergen entered by the user is compared with raw ingredient text.
#[derive(
    EnumString,
    Display,
    AsRefStr,
    VariantArray,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AllergenMatch {
    /// "虾" also rejects "虾仁".
    #[default]
    Substring,
    Exact,
}

impl AllergenMatch {
    /// Blank allergens never match.
    pub fn matches(&self, ingredient: &str, allergen: &str) -> bool {
        let allergen = allergen.trim();
        if allergen.is_empty() {
            return false;
        }

        match self {
            AllergenMatch::Substring => ingredient.contains(allergen),
            AllergenMatch::Exact => ingredient.trim() == allergen,
        }
    }
}
