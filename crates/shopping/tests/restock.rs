use dailykitchen_mealplan::{DailyMenu, Pantry, derive_shopping_list};
use dailykitchen_recipe::{Catalog, Recipe, SynonymTable};
use dailykitchen_shared::mealplan::MealSlot;
use dailykitchen_shopping::{CategorizationService, OTHER_CATEGORY, restock};
use dailykitchen_user::{Command, JsonProfileStore, MemoryProfileStore, Profile, ProfileStore};
use temp_dir::TempDir;

fn planned_menu(profile: &Profile) -> DailyMenu {
    let mut menu = DailyMenu::default();
    menu.set_dish(
        MealSlot::LunchMeat,
        Some(Recipe::new("白灼基围虾", ["基围虾", "生姜"])),
    );
    menu.set_dish(MealSlot::LunchVeg, Some(Recipe::new("西红柿炒鸡蛋", ["番茄", "鸡蛋"])));
    menu.refresh_shopping_list(&Pantry::new(&profile.fridge_items, SynonymTable::builtin()));
    menu
}

#[test]
fn test_restock_empties_the_shopping_list() -> anyhow::Result<()> {
    let store = MemoryProfileStore::new(Profile::default());
    let mut command = Command::load(&store)?;
    let mut menu = planned_menu(command.profile());

    assert_eq!(menu.shopping_list.len(), 2);

    let added = restock(&mut command, &mut menu, SynonymTable::builtin())?;

    assert_eq!(added, 2);
    assert!(menu.shopping_list.is_empty());
    assert_eq!(store.saves(), 1);
    let saved = store.snapshot().unwrap();
    assert!(saved.fridge_items.contains("基围虾"));
    assert!(saved.fridge_items.contains("生姜"));

    Ok(())
}

#[test]
fn test_restock_with_nothing_to_buy_does_not_save() -> anyhow::Result<()> {
    let store = MemoryProfileStore::new(Profile::default());
    let mut command = Command::load(&store)?;
    let mut menu = DailyMenu::default();

    assert_eq!(restock(&mut command, &mut menu, SynonymTable::builtin())?, 0);
    assert_eq!(store.saves(), 0);

    Ok(())
}

#[test]
fn test_restock_persists_to_json_store() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let store = JsonProfileStore::new(dir.child("profile.json"));
    let mut command = Command::load(&store)?;
    let mut menu = planned_menu(command.profile());

    restock(&mut command, &mut menu, SynonymTable::builtin())?;

    let reloaded = JsonProfileStore::new(dir.child("profile.json")).load()?;
    let pantry = Pantry::new(&reloaded.fridge_items, SynonymTable::builtin());
    assert!(derive_shopping_list(&menu, &pantry).is_empty());

    Ok(())
}

#[test]
fn test_default_fridge_groups_with_builtin_categories() -> anyhow::Result<()> {
    let catalog = Catalog::builtin()?;
    let service = CategorizationService::new(catalog.fridge_categories(), SynonymTable::builtin());
    let mut fridge = Profile::default().fridge_items;
    fridge.insert("榴莲".to_owned());

    let groups = service.group(&fridge);

    assert!(groups.iter().any(|(name, items)| *name == "肉蛋" && items.contains(&"鸡蛋".to_owned())));
    assert!(groups.iter().any(|(name, items)| *name == "蔬菜" && items.contains(&"西红柿".to_owned())));
    assert_eq!(groups.last().map(|(name, _)| *name), Some(OTHER_CATEGORY));

    Ok(())
}
