use anyhow::Result;
use dailykitchen::card;
use dailykitchen_user::{MockScanner, UpdateFridgeInput};
use std::io::Write;
use std::path::Path;

use super::FileSession;

pub fn show(session: &FileSession) -> Result<()> {
    let groups = session.categorizer().group(&session.profile().fridge_items);

    card::write_fridge(&mut std::io::stdout().lock(), &groups)?;

    Ok(())
}

pub fn set(session: &mut FileSession, items: Vec<String>, extra: String) -> Result<()> {
    session.update_fridge(UpdateFridgeInput { items, extra })?;

    show(session)
}

pub fn add(session: &mut FileSession, items: &str) -> Result<()> {
    let added = session.add_fridge_items(items)?;

    writeln!(std::io::stdout().lock(), "新增 {added} 样食材")?;

    show(session)
}

pub fn scan(session: &mut FileSession, image: Option<&Path>) -> Result<()> {
    let image = match image {
        Some(path) => std::fs::read(path)?,
        None => Vec::new(),
    };
    let added = session.scan_fridge(&MockScanner, &image)?;

    writeln!(std::io::stdout().lock(), "识别到 {added} 样新食材")?;

    show(session)
}

pub fn restock(session: &mut FileSession) -> Result<()> {
    let added = session.restock()?;

    let mut out = std::io::stdout().lock();
    writeln!(out, "已入库 {added} 样食材")?;
    card::write_shopping_list(&mut out, session.menu())?;

    Ok(())
}
