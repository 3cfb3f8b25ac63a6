use anyhow::Result;
use dailykitchen::card;
use dailykitchen_shared::mealplan::{MealSlot, PoolKey};
use std::io::Write;
use time::OffsetDateTime;

use super::FileSession;

pub fn generate(session: &mut FileSession) -> Result<()> {
    session.generate()?;

    let mut out = std::io::stdout().lock();
    card::write_menu(
        &mut out,
        &session.profile().nickname,
        session.menu(),
        &session.pantry(),
    )?;

    Ok(())
}

pub fn swap(session: &mut FileSession, slot: MealSlot, pool: Option<PoolKey>) -> Result<()> {
    let mut out = std::io::stdout().lock();

    if !session.swap(slot, pool)? {
        writeln!(out, "{slot} 没有可替换的选择，保持不变")?;
    }

    card::write_menu(
        &mut out,
        &session.profile().nickname,
        session.menu(),
        &session.pantry(),
    )?;

    Ok(())
}

pub fn cook(session: &FileSession, target: &str) -> Result<()> {
    let recipe = match target.parse::<MealSlot>() {
        Ok(slot) => session.cook(slot)?,
        Err(_) => session.recipe(target)?,
    };

    let mut out = std::io::stdout().lock();
    card::write_recipe(&mut out, recipe, &session.pantry())?;

    Ok(())
}

pub fn save(session: &mut FileSession) -> Result<()> {
    let today = OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date();
    let entry = session.save_history(today)?;

    writeln!(std::io::stdout().lock(), "已保存 {} 的菜单", entry.date)?;

    Ok(())
}

pub fn history(session: &FileSession, limit: usize) -> Result<()> {
    let entries = session.history(limit)?;

    card::write_history(&mut std::io::stdout().lock(), &entries)?;

    Ok(())
}
