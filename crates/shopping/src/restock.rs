use dailykitchen_mealplan::{DailyMenu, Pantry};
use dailykitchen_recipe::SynonymTable;
use dailykitchen_user::{Command, ProfileStore};

/// Moves every shopping-list item into the fridge, saves the profile and
/// recomputes the list, which comes out empty. Returns how many items were
/// new to the fridge.
pub fn restock<S: ProfileStore>(
    command: &mut Command<S>,
    menu: &mut DailyMenu,
    synonyms: &SynonymTable,
) -> dailykitchen_shared::Result<usize> {
    if menu.shopping_list.is_empty() {
        tracing::info!("shopping list empty, nothing to restock");
        return Ok(0);
    }

    let added = command.add_fridge_items(&menu.shopping_list)?;
    let pantry = Pantry::new(&command.profile().fridge_items, synonyms);
    menu.refresh_shopping_list(&pantry);

    tracing::info!(added, left = menu.shopping_list.len(), "restocked from shopping list");

    Ok(added)
}
