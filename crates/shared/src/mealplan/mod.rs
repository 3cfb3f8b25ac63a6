use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Named recipe pool inside the catalog.
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
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PoolKey {
    Breakfast,
    LunchMeat,
    LunchVeg,
    Soup,
    DinnerMeat,
    DinnerVeg,
    Fruit,
}

impl PoolKey {
    /// Lunch pool used when a dinner pool is absent or empty.
    pub fn fallback(&self) -> Option<PoolKey> {
        match self {
            PoolKey::DinnerMeat => Some(PoolKey::LunchMeat),
            PoolKey::DinnerVeg => Some(PoolKey::LunchVeg),
            _ => None,
        }
    }
}

/// One position of the daily menu, in planning order.
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
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    Breakfast,
    LunchMeat,
    LunchVeg,
    LunchSoup,
    DinnerMeat,
    DinnerVeg,
    DinnerSoup,
    Fruit,
}

impl MealSlot {
    pub fn pool_key(&self) -> PoolKey {
        match self {
            MealSlot::Breakfast => PoolKey::Breakfast,
            MealSlot::LunchMeat => PoolKey::LunchMeat,
            MealSlot::LunchVeg => PoolKey::LunchVeg,
            MealSlot::LunchSoup | MealSlot::DinnerSoup => PoolKey::Soup,
            MealSlot::DinnerMeat => PoolKey::DinnerMeat,
            MealSlot::DinnerVeg => PoolKey::DinnerVeg,
            MealSlot::Fruit => PoolKey::Fruit,
        }
    }

    pub fn meal(&self) -> Meal {
        match self {
            MealSlot::Breakfast => Meal::Breakfast,
            MealSlot::LunchMeat | MealSlot::LunchVeg | MealSlot::LunchSoup => Meal::Lunch,
            MealSlot::DinnerMeat | MealSlot::DinnerVeg | MealSlot::DinnerSoup => Meal::Dinner,
            MealSlot::Fruit => Meal::Fruit,
        }
    }

    pub fn is_dish(&self) -> bool {
        !matches!(self, MealSlot::Fruit)
    }
}

#[derive(EnumString, Display, AsRefStr, VariantArray, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
    Fruit,
}

impl Meal {
    pub fn slots(&self) -> &'static [MealSlot] {
        match self {
            Meal::Breakfast => &[MealSlot::Breakfast],
            Meal::Lunch => &[MealSlot::LunchMeat, MealSlot::LunchVeg, MealSlot::LunchSoup],
            Meal::Dinner => &[
                MealSlot::DinnerMeat,
                MealSlot::DinnerVeg,
                MealSlot::DinnerSoup,
            ],
            Meal::Fruit => &[MealSlot::Fruit],
        }
    }
}
