use std::collections::BTreeSet;

use crate::{DailyMenu, Pantry};

/// Every planned ingredient the fridge lacks, by its raw recipe name.
/// Recomputed from scratch on each change; the fruit slot never contributes.
pub fn derive_shopping_list(menu: &DailyMenu, pantry: &Pantry<'_>) -> BTreeSet<String> {
    menu.dishes()
        .flat_map(|(_, recipe)| pantry.missing(recipe))
        .map(str::to_owned)
        .collect()
}
