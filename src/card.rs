//! Plain-text views printed by the command line.

use dailykitchen_mealplan::{DailyMenu, HistoryEntry, Pantry};
use dailykitchen_recipe::Recipe;
use dailykitchen_shared::mealplan::{Meal, MealSlot};
use dailykitchen_user::Profile;
use std::io::{Result, Write};
use strum::VariantArray;

pub fn meal_label(meal: Meal) -> &'static str {
    match meal {
        Meal::Breakfast => "早餐",
        Meal::Lunch => "午餐",
        Meal::Dinner => "晚餐",
        Meal::Fruit => "水果",
    }
}

/// Today's card. Meals without any filled slot are skipped; ingredients the
/// fridge already covers are marked.
pub fn write_menu(
    out: &mut impl Write,
    nickname: &str,
    menu: &DailyMenu,
    pantry: &Pantry<'_>,
) -> Result<()> {
    if menu.is_empty() {
        writeln!(out, "还没有菜单，先运行 generate。")?;
        return Ok(());
    }

    writeln!(out, "{nickname} 的今日菜单")?;

    for meal in Meal::VARIANTS {
        let filled: Vec<MealSlot> = meal
            .slots()
            .iter()
            .copied()
            .filter(|slot| menu.name(*slot).is_some())
            .collect();
        if filled.is_empty() {
            continue;
        }

        writeln!(out)?;
        writeln!(out, "【{}】", meal_label(*meal))?;

        for slot in filled {
            match menu.dish(slot) {
                Some(recipe) => {
                    let ingredients: Vec<String> = recipe
                        .ingredients
                        .iter()
                        .map(|i| if pantry.has(i) { format!("{i}✓") } else { i.clone() })
                        .collect();
                    writeln!(
                        out,
                        "  {:<12} {}  ({})",
                        slot.as_ref(),
                        recipe.name,
                        ingredients.join(" ")
                    )?;
                }
                None => {
                    if let Some(name) = menu.name(slot) {
                        writeln!(out, "  {name}")?;
                    }
                }
            }
        }
    }

    writeln!(out)?;
    write_shopping_list(out, menu)
}

pub fn write_shopping_list(out: &mut impl Write, menu: &DailyMenu) -> Result<()> {
    if menu.shopping_list.is_empty() {
        writeln!(out, "缺货清单：无，食材齐全")?;
    } else {
        let items: Vec<&str> = menu.shopping_list.iter().map(String::as_str).collect();
        writeln!(out, "缺货清单：{}", items.join("、"))?;
    }

    Ok(())
}

/// Cooking view: time, difficulty, ingredients and numbered steps.
pub fn write_recipe(out: &mut impl Write, recipe: &Recipe, pantry: &Pantry<'_>) -> Result<()> {
    writeln!(out, "{}", recipe.name)?;
    writeln!(
        out,
        "时间：{}  难度：{}",
        recipe.time.as_deref().unwrap_or("-"),
        recipe.difficulty.as_deref().unwrap_or("-")
    )?;

    writeln!(out, "食材：")?;
    for ingredient in &recipe.ingredients {
        let mark = if pantry.has(ingredient) { "✓" } else { "✗" };
        writeln!(out, "  {mark} {ingredient}")?;
    }

    if recipe.steps.is_empty() {
        return Ok(());
    }

    writeln!(out, "步骤：")?;
    for (n, step) in recipe.steps.iter().enumerate() {
        writeln!(out, "  {}. {step}", n + 1)?;
    }

    Ok(())
}

pub fn write_profile(out: &mut impl Write, profile: &Profile) -> Result<()> {
    let join = |items: &std::collections::BTreeSet<String>| {
        if items.is_empty() {
            "-".to_owned()
        } else {
            items.iter().map(String::as_str).collect::<Vec<_>>().join("、")
        }
    };

    writeln!(out, "昵称：{}", profile.nickname)?;
    writeln!(out, "过敏源：{}", join(&profile.allergens))?;
    writeln!(out, "喜欢：{}", join(&profile.likes))?;
    writeln!(out, "不喜欢：{}", join(&profile.dislikes))?;

    Ok(())
}

pub fn write_fridge(out: &mut impl Write, groups: &[(&str, Vec<String>)]) -> Result<()> {
    if groups.is_empty() {
        writeln!(out, "冰箱是空的")?;
        return Ok(());
    }

    for (category, items) in groups {
        writeln!(out, "{category}：{}", items.join("、"))?;
    }

    Ok(())
}

pub fn write_history(out: &mut impl Write, entries: &[HistoryEntry]) -> Result<()> {
    if entries.is_empty() {
        writeln!(out, "还没有历史记录")?;
        return Ok(());
    }

    for entry in entries {
        writeln!(out, "{}", entry.date)?;
        if let Some(breakfast) = &entry.menu.breakfast {
            writeln!(out, "  {}：{breakfast}", meal_label(Meal::Breakfast))?;
        }
        if !entry.menu.lunch.is_empty() {
            let lunch = entry.menu.lunch.join("、");
            writeln!(out, "  {}：{lunch}", meal_label(Meal::Lunch))?;
        }
        if !entry.menu.dinner.is_empty() {
            let dinner = entry.menu.dinner.join("、");
            writeln!(out, "  {}：{dinner}", meal_label(Meal::Dinner))?;
        }
        if let Some(fruit) = &entry.menu.fruit {
            writeln!(out, "  {}：{fruit}", meal_label(Meal::Fruit))?;
        }
    }

    Ok(())
}
