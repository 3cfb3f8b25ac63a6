use anyhow::Result;
use dailykitchen::card;
use dailykitchen_shared::user::Feedback;
use dailykitchen_user::{SetNicknameInput, UpdateAllergensInput};
use std::io::Write;

use super::FileSession;

pub fn feedback(session: &mut FileSession, name: &str, feedback: Feedback) -> Result<()> {
    let state = session.toggle(name, feedback)?;

    let mut out = std::io::stdout().lock();
    match state {
        Some(Feedback::Like) => writeln!(out, "已喜欢 {name}")?,
        Some(Feedback::Dislike) => writeln!(out, "已不喜欢 {name}")?,
        None => writeln!(out, "已取消 {name} 的评价")?,
    }

    Ok(())
}

pub fn show(session: &FileSession) -> Result<()> {
    card::write_profile(&mut std::io::stdout().lock(), session.profile())?;

    Ok(())
}

pub fn nickname(session: &mut FileSession, nickname: String) -> Result<()> {
    session.set_nickname(SetNicknameInput { nickname })?;

    writeln!(std::io::stdout().lock(), "昵称已更新为 {}", session.profile().nickname)?;

    Ok(())
}

pub fn allergens(session: &mut FileSession, common: Vec<String>, custom: String) -> Result<()> {
    session.update_allergens(UpdateAllergensInput { common, custom })?;

    card::write_profile(&mut std::io::stdout().lock(), session.profile())?;

    Ok(())
}
