use dailykitchen_recipe::Recipe;
use dailykitchen_shared::user::AllergenMatch;
use std::collections::BTreeSet;

/// A recipe is unsafe as soon as one raw ingredient matches one allergen.
pub fn is_safe(recipe: &Recipe, allergens: &BTreeSet<String>, policy: AllergenMatch) -> bool {
    !recipe
        .ingredients
        .iter()
        .any(|ingredient| contains_allergen(ingredient, allergens, policy))
}

pub fn contains_allergen(
    ingredient: &str,
    allergens: &BTreeSet<String>,
    policy: AllergenMatch,
) -> bool {
    allergens
        .iter()
        .any(|allergen| policy.matches(ingredient, allergen))
}
