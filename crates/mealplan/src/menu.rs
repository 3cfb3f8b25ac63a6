use dailykitchen_recipe::Recipe;
use dailykitchen_shared::mealplan::MealSlot;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use strum::{AsRefStr, Display, VariantArray};

use crate::Pantry;

#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum PlanState {
    Empty,
    PartiallyFilled,
    Complete,
}

/// Today's plan. Any slot may stay empty when its pool had nothing safe to
/// offer; consumers skip empty slots.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DailyMenu {
    pub breakfast: Option<Recipe>,
    pub lunch_meat: Option<Recipe>,
    pub lunch_veg: Option<Recipe>,
    pub lunch_soup: Option<Recipe>,
    pub dinner_meat: Option<Recipe>,
    pub dinner_veg: Option<Recipe>,
    pub dinner_soup: Option<Recipe>,
    pub fruit: Option<String>,
    /// Raw names of planned ingredients absent from the fridge.
    pub shopping_list: BTreeSet<String>,
}

impl DailyMenu {
    fn dish_slot(&self, slot: MealSlot) -> Option<&Option<Recipe>> {
        match slot {
            MealSlot::Breakfast => Some(&self.breakfast),
            MealSlot::LunchMeat => Some(&self.lunch_meat),
            MealSlot::LunchVeg => Some(&self.lunch_veg),
            MealSlot::LunchSoup => Some(&self.lunch_soup),
            MealSlot::DinnerMeat => Some(&self.dinner_meat),
            MealSlot::DinnerVeg => Some(&self.dinner_veg),
            MealSlot::DinnerSoup => Some(&self.dinner_soup),
            MealSlot::Fruit => None,
        }
    }

    fn dish_slot_mut(&mut self, slot: MealSlot) -> Option<&mut Option<Recipe>> {
        match slot {
            MealSlot::Breakfast => Some(&mut self.breakfast),
            MealSlot::LunchMeat => Some(&mut self.lunch_meat),
            MealSlot::LunchVeg => Some(&mut self.lunch_veg),
            MealSlot::LunchSoup => Some(&mut self.lunch_soup),
            MealSlot::DinnerMeat => Some(&mut self.dinner_meat),
            MealSlot::DinnerVeg => Some(&mut self.dinner_veg),
            MealSlot::DinnerSoup => Some(&mut self.dinner_soup),
            MealSlot::Fruit => None,
        }
    }

    /// The recipe planned for a dish slot. Always `None` for the fruit slot.
    pub fn dish(&self, slot: MealSlot) -> Option<&Recipe> {
        self.dish_slot(slot).and_then(Option::as_ref)
    }

    /// Returns `false` for the fruit slot, which holds a bare name.
    pub fn set_dish(&mut self, slot: MealSlot, recipe: Option<Recipe>) -> bool {
        match self.dish_slot_mut(slot) {
            Some(current) => {
                *current = recipe;
                true
            }
            None => false,
        }
    }

    /// Display name of whatever occupies the slot, fruit included.
    pub fn name(&self, slot: MealSlot) -> Option<&str> {
        match slot {
            MealSlot::Fruit => self.fruit.as_deref(),
            _ => self.dish(slot).map(|r| r.name.as_str()),
        }
    }

    /// Filled dish slots in planning order.
    pub fn dishes(&self) -> impl Iterator<Item = (MealSlot, &Recipe)> {
        MealSlot::VARIANTS
            .iter()
            .filter_map(|slot| self.dish(*slot).map(|recipe| (*slot, recipe)))
    }

    pub fn filled(&self) -> usize {
        MealSlot::VARIANTS
            .iter()
            .filter(|slot| self.name(**slot).is_some())
            .count()
    }

    pub fn state(&self) -> PlanState {
        match self.filled() {
            0 => PlanState::Empty,
            n if n == MealSlot::VARIANTS.len() => PlanState::Complete,
            _ => PlanState::PartiallyFilled,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.state() == PlanState::Empty
    }

    pub fn refresh_shopping_list(&mut self, pantry: &Pantry<'_>) {
        self.shopping_list = crate::derive_shopping_list(self, pantry);
    }
}
