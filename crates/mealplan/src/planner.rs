use dailykitchen_recipe::{Catalog, Recipe};
use dailykitchen_shared::mealplan::{MealSlot, PoolKey};
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::{DailyMenu, Prefer, Selector, contains_allergen};

/// Fills and edits a [`DailyMenu`] from the catalog for one profile.
pub struct Planner<'a> {
    catalog: &'a Catalog,
    selector: Selector<'a>,
}

impl<'a> Planner<'a> {
    pub fn new(catalog: &'a Catalog, selector: Selector<'a>) -> Self {
        Self { catalog, selector }
    }

    pub fn selector(&self) -> &Selector<'a> {
        &self.selector
    }

    fn pick<R: Rng + ?Sized>(
        &self,
        key: PoolKey,
        exclude: &[&str],
        prefer: Prefer,
        rng: &mut R,
    ) -> Option<Recipe> {
        self.selector
            .select(self.catalog.pool_or_fallback(key), exclude, prefer, rng)
            .cloned()
    }

    fn pick_fruit<R: Rng + ?Sized>(&self, exclude: Option<&str>, rng: &mut R) -> Option<String> {
        let fruits: Vec<&String> = self
            .catalog
            .fruits()
            .iter()
            .filter(|fruit| Some(fruit.as_str()) != exclude)
            .filter(|fruit| {
                !contains_allergen(fruit, self.selector.allergens(), self.selector.policy())
            })
            .collect();

        fruits.choose(rng).map(|fruit| fruit.to_string())
    }

    /// Replaces the whole menu. Slots are filled in a fixed order since later
    /// picks depend on earlier ones; an empty slot never stops the pass.
    pub fn generate<R: Rng + ?Sized>(&self, menu: &mut DailyMenu, rng: &mut R) {
        *menu = DailyMenu::default();

        menu.breakfast = self.pick(PoolKey::Breakfast, &[], Prefer::None, rng);
        menu.lunch_meat = self.pick(PoolKey::LunchMeat, &[], Prefer::None, rng);
        menu.lunch_veg = self.pick(PoolKey::LunchVeg, &[], Prefer::None, rng);
        menu.lunch_soup = self.pick(PoolKey::Soup, &[], Prefer::None, rng);

        let lunch_meat = menu.lunch_meat.as_ref().map(|r| r.name.as_str());
        let lunch_is_red = menu
            .lunch_meat
            .as_ref()
            .is_some_and(|r| self.selector.has_red_meat(r));
        let exclude: Vec<&str> = lunch_meat.into_iter().collect();

        let dinner_meat = if lunch_is_red {
            self.pick(PoolKey::DinnerMeat, &exclude, Prefer::WhiteMeat, rng)
                .or_else(|| {
                    tracing::debug!("no white meat dinner, retrying without preference");
                    self.pick(PoolKey::DinnerMeat, &exclude, Prefer::None, rng)
                })
        } else {
            self.pick(PoolKey::DinnerMeat, &exclude, Prefer::None, rng)
        };

        let dinner_veg = self.pick(PoolKey::DinnerVeg, &[], Prefer::None, rng);

        let lunch_soup = menu.lunch_soup.as_ref().map(|r| r.name.as_str());
        let exclude: Vec<&str> = lunch_soup.into_iter().collect();
        let dinner_soup = self.pick(PoolKey::Soup, &exclude, Prefer::None, rng);

        menu.dinner_meat = dinner_meat;
        menu.dinner_veg = dinner_veg;
        menu.dinner_soup = dinner_soup;
        menu.fruit = self.pick_fruit(None, rng);
        menu.refresh_shopping_list(self.selector.pantry());

        tracing::info!(
            filled = menu.filled(),
            state = %menu.state(),
            shopping = menu.shopping_list.len(),
            lunch_is_red,
            "menu generated"
        );
    }

    /// Re-selects one slot from `key`'s pool, never returning the current
    /// occupant. Returns `false` and leaves the slot untouched when there is
    /// no alternative.
    pub fn swap<R: Rng + ?Sized>(
        &self,
        menu: &mut DailyMenu,
        slot: MealSlot,
        key: PoolKey,
        rng: &mut R,
    ) -> bool {
        let current = menu.name(slot).map(str::to_owned);

        let swapped = if slot.is_dish() {
            let exclude: Vec<&str> = current.as_deref().into_iter().collect();
            match self.pick(key, &exclude, Prefer::None, rng) {
                Some(recipe) => menu.set_dish(slot, Some(recipe)),
                None => false,
            }
        } else {
            match self.pick_fruit(current.as_deref(), rng) {
                Some(fruit) => {
                    menu.fruit = Some(fruit);
                    true
                }
                None => false,
            }
        };

        if !swapped {
            tracing::info!(%slot, pool = %key, current = ?current, "no alternative, keeping current");
            return false;
        }

        menu.refresh_shopping_list(self.selector.pantry());
        tracing::info!(
            %slot,
            pool = %key,
            from = ?current,
            to = ?menu.name(slot),
            "slot swapped"
        );

        true
    }

    /// [`Planner::swap`] with the slot's own pool.
    pub fn swap_slot<R: Rng + ?Sized>(&self, menu: &mut DailyMenu, slot: MealSlot, rng: &mut R) -> bool {
        self.swap(menu, slot, slot.pool_key(), rng)
    }

    /// Recomputes the shopping list against the current pantry.
    pub fn refresh(&self, menu: &mut DailyMenu) {
        menu.refresh_shopping_list(self.selector.pantry());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dailykitchen_recipe::SynonymTable;
    use dailykitchen_shared::user::AllergenMatch;
    use dailykitchen_user::Profile;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn profile(fridge: &[&str], allergens: &[&str]) -> Profile {
        let mut profile = Profile::blank("tester");
        profile.fridge_items = fridge.iter().map(|s| s.to_string()).collect();
        profile.allergens = allergens.iter().map(|s| s.to_string()).collect();
        profile
    }

    fn catalog() -> Catalog {
        Catalog::default()
            .with_pool(
                "breakfast",
                vec![
                    Recipe::new("番茄炒蛋", ["番茄", "鸡蛋"]),
                    Recipe::new("牛奶燕麦", ["牛奶", "燕麦"]),
                ],
            )
            .with_pool(
                "lunch_meat",
                vec![
                    Recipe::new("红烧牛腩", ["牛腩", "土豆"]),
                    Recipe::new("可乐鸡翅", ["鸡翅", "可乐"]),
                    Recipe::new("清蒸鳕鱼", ["鳕鱼", "姜"]),
                ],
            )
            .with_pool(
                "lunch_veg",
                vec![
                    Recipe::new("手撕包菜", ["圆白菜", "大蒜"]),
                    Recipe::new("蒜蓉西兰花", ["花菜", "大蒜"]),
                ],
            )
            .with_pool(
                "soup",
                vec![
                    Recipe::new("紫菜蛋花汤", ["紫菜", "鸡蛋"]),
                    Recipe::new("冬瓜排骨汤", ["冬瓜", "排骨"]),
                ],
            )
            .with_fruits(["苹果", "香蕉"])
    }

    #[test]
    fn test_generate_fills_every_slot_and_respects_exclusions() {
        let catalog = catalog();
        let profile = profile(&["鸡蛋"], &[]);
        let synonyms = SynonymTable::builtin();

        for seed in 0..100 {
            let planner = Planner::new(
                &catalog,
                Selector::new(&profile, synonyms, AllergenMatch::Substring),
            );
            let mut menu = DailyMenu::default();
            planner.generate(&mut menu, &mut StdRng::seed_from_u64(seed));

            assert_eq!(menu.state(), crate::PlanState::Complete);
            assert_ne!(menu.name(MealSlot::LunchMeat), menu.name(MealSlot::DinnerMeat));
            assert_ne!(menu.name(MealSlot::LunchSoup), menu.name(MealSlot::DinnerSoup));
        }
    }

    #[test]
    fn test_red_lunch_prefers_white_meat_dinner() {
        let catalog = catalog();
        // Fridge makes 红烧牛腩 the only tier 0 lunch meat.
        let profile = profile(&["牛肉", "土豆"], &[]);
        let planner = Planner::new(
            &catalog,
            Selector::new(&profile, SynonymTable::builtin(), AllergenMatch::Substring),
        );

        for seed in 0..50 {
            let mut menu = DailyMenu::default();
            planner.generate(&mut menu, &mut StdRng::seed_from_u64(seed));

            assert_eq!(menu.name(MealSlot::LunchMeat), Some("红烧牛腩"));
            let dinner = menu.dinner_meat.as_ref().map(|r| r.name.as_str());
            assert!(matches!(dinner, Some("可乐鸡翅") | Some("清蒸鳕鱼")));
        }
    }

    #[test]
    fn test_white_meat_retry_without_preference() {
        let catalog = Catalog::default().with_pool(
            "lunch_meat",
            vec![
                Recipe::new("红烧牛腩", ["牛腩"]),
                Recipe::new("回锅肉", ["猪肉"]),
            ],
        );
        let profile = profile(&[], &[]);
        let planner = Planner::new(
            &catalog,
            Selector::new(&profile, SynonymTable::builtin(), AllergenMatch::Substring),
        );

        let mut menu = DailyMenu::default();
        planner.generate(&mut menu, &mut StdRng::seed_from_u64(3));

        assert!(menu.lunch_meat.is_some());
        assert!(menu.dinner_meat.is_some());
        assert_ne!(menu.name(MealSlot::LunchMeat), menu.name(MealSlot::DinnerMeat));
    }

    #[test]
    fn test_empty_pools_leave_slots_empty() {
        let catalog = Catalog::default();
        let profile = profile(&[], &[]);
        let planner = Planner::new(
            &catalog,
            Selector::new(&profile, SynonymTable::builtin(), AllergenMatch::Substring),
        );

        let mut menu = DailyMenu::default();
        planner.generate(&mut menu, &mut StdRng::seed_from_u64(1));

        assert!(menu.is_empty());
        assert!(menu.shopping_list.is_empty());
    }

    #[test]
    fn test_allergic_fruit_is_never_planned() {
        let catalog = Catalog::default().with_fruits(["芒果", "苹果"]);
        let profile = profile(&[], &["芒果"]);
        let planner = Planner::new(
            &catalog,
            Selector::new(&profile, SynonymTable::builtin(), AllergenMatch::Substring),
        );

        for seed in 0..50 {
            let mut menu = DailyMenu::default();
            planner.generate(&mut menu, &mut StdRng::seed_from_u64(seed));
            assert_eq!(menu.fruit.as_deref(), Some("苹果"));
        }
    }

    #[test]
    fn test_swap_replaces_occupant_and_refreshes_shopping_list() {
        let catalog = catalog();
        let profile = profile(&[], &[]);
        let planner = Planner::new(
            &catalog,
            Selector::new(&profile, SynonymTable::builtin(), AllergenMatch::Substring),
        );
        let mut rng = StdRng::seed_from_u64(9);

        let mut menu = DailyMenu::default();
        planner.generate(&mut menu, &mut rng);
        let before = menu.name(MealSlot::LunchVeg).map(str::to_owned);

        assert!(planner.swap_slot(&mut menu, MealSlot::LunchVeg, &mut rng));
        assert_ne!(menu.name(MealSlot::LunchVeg).map(str::to_owned), before);
        assert_eq!(
            menu.shopping_list,
            crate::derive_shopping_list(&menu, planner.selector().pantry())
        );
    }

    #[test]
    fn test_swap_without_alternative_keeps_current() {
        let catalog = Catalog::default()
            .with_pool("breakfast", vec![Recipe::new("粥", ["米"])])
            .with_fruits(["苹果"]);
        let profile = profile(&[], &[]);
        let planner = Planner::new(
            &catalog,
            Selector::new(&profile, SynonymTable::builtin(), AllergenMatch::Substring),
        );
        let mut rng = StdRng::seed_from_u64(1);

        let mut menu = DailyMenu::default();
        planner.generate(&mut menu, &mut rng);

        assert!(!planner.swap_slot(&mut menu, MealSlot::Breakfast, &mut rng));
        assert_eq!(menu.name(MealSlot::Breakfast), Some("粥"));
        assert!(!planner.swap_slot(&mut menu, MealSlot::Fruit, &mut rng));
        assert_eq!(menu.fruit.as_deref(), Some("苹果"));
    }

    #[test]
    fn test_swap_dinner_veg_uses_lunch_pool() {
        let catalog = catalog();
        let profile = profile(&[], &[]);
        let planner = Planner::new(
            &catalog,
            Selector::new(&profile, SynonymTable::builtin(), AllergenMatch::Substring),
        );
        let mut rng = StdRng::seed_from_u64(4);

        let mut menu = DailyMenu::default();
        assert!(planner.swap_slot(&mut menu, MealSlot::DinnerVeg, &mut rng));

        let name = menu.name(MealSlot::DinnerVeg).unwrap_or_default();
        assert!(catalog.pool(PoolKey::LunchVeg).iter().any(|r| r.name == name));
    }

    #[test]
    fn test_swap_with_explicit_pool() {
        let catalog = catalog();
        let profile = profile(&[], &[]);
        let planner = Planner::new(
            &catalog,
            Selector::new(&profile, SynonymTable::builtin(), AllergenMatch::Substring),
        );
        let mut rng = StdRng::seed_from_u64(5);

        let mut menu = DailyMenu::default();
        assert!(planner.swap(&mut menu, MealSlot::Breakfast, PoolKey::Soup, &mut rng));

        let name = menu.name(MealSlot::Breakfast).unwrap_or_default();
        assert!(catalog.pool(PoolKey::Soup).iter().any(|r| r.name == name));
    }
}
