use dailykitchen_shared::mealplan::{Meal, MealSlot};
use dailykitchen_user::write_json;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use time::Date;
use time::macros::format_description;

use crate::DailyMenu;

/// Dish names per meal. Empty slots are left out.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct MenuSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakfast: Option<String>,
    pub lunch: Vec<String>,
    pub dinner: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fruit: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    /// `YYYY-MM-DD`.
    pub date: String,
    pub menu: MenuSnapshot,
}

impl HistoryEntry {
    pub fn snapshot(menu: &DailyMenu, date: Date) -> dailykitchen_shared::Result<Self> {
        let date = match date.format(format_description!("[year]-[month]-[day]")) {
            Ok(date) => date,
            Err(e) => dailykitchen_shared::bail!("failed to format history date: {}", e),
        };

        let names = |meal: Meal| -> Vec<String> {
            meal.slots()
                .iter()
                .filter_map(|slot| menu.name(*slot).map(str::to_owned))
                .collect()
        };

        Ok(Self {
            date,
            menu: MenuSnapshot {
                breakfast: menu.name(MealSlot::Breakfast).map(str::to_owned),
                lunch: names(Meal::Lunch),
                dinner: names(Meal::Dinner),
                fruit: menu.fruit.clone(),
            },
        })
    }
}

/// Saved menus, most recent first.
pub trait HistoryStore {
    fn append(&self, entry: HistoryEntry) -> dailykitchen_shared::Result<()>;
    fn recent(&self, limit: usize) -> dailykitchen_shared::Result<Vec<HistoryEntry>>;
}

#[derive(Debug, Clone)]
pub struct JsonHistoryStore {
    path: PathBuf,
}

impl JsonHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> dailykitchen_shared::Result<Vec<HistoryEntry>> {
        if !self.path.exists() {
            return Ok(vec![]);
        }

        let content = std::fs::read_to_string(&self.path)?;
        match serde_json::from_str(&content) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "unreadable history, starting over"
                );
                Ok(vec![])
            }
        }
    }
}

impl HistoryStore for JsonHistoryStore {
    fn append(&self, entry: HistoryEntry) -> dailykitchen_shared::Result<()> {
        let mut entries = self.read_all()?;
        entries.insert(0, entry);

        write_json(&self.path, &entries)
    }

    fn recent(&self, limit: usize) -> dailykitchen_shared::Result<Vec<HistoryEntry>> {
        let mut entries = self.read_all()?;
        entries.truncate(limit);

        Ok(entries)
    }
}

#[derive(Debug, Default)]
pub struct MemoryHistoryStore {
    entries: RefCell<Vec<HistoryEntry>>,
}

impl HistoryStore for MemoryHistoryStore {
    fn append(&self, entry: HistoryEntry) -> dailykitchen_shared::Result<()> {
        self.entries.borrow_mut().insert(0, entry);

        Ok(())
    }

    fn recent(&self, limit: usize) -> dailykitchen_shared::Result<Vec<HistoryEntry>> {
        Ok(self.entries.borrow().iter().take(limit).cloned().collect())
    }
}

impl<S: HistoryStore + ?Sized> HistoryStore for &S {
    fn append(&self, entry: HistoryEntry) -> dailykitchen_shared::Result<()> {
        (**self).append(entry)
    }

    fn recent(&self, limit: usize) -> dailykitchen_shared::Result<Vec<HistoryEntry>> {
        (**self).recent(limit)
    }
}
