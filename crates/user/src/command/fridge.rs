use std::collections::BTreeSet;
use validator::Validate;

use crate::{PantryScanner, ProfileStore};

#[derive(Validate, Default)]
pub struct UpdateFridgeInput {
    pub items: Vec<String>,
    /// Comma-separated extras typed by hand.
    #[validate(length(max = 500))]
    pub extra: String,
}

impl<S: ProfileStore> super::Command<S> {
    /// Replaces the fridge content.
    pub fn update_fridge(&mut self, input: UpdateFridgeInput) -> dailykitchen_shared::Result<()> {
        input.validate()?;

        let items: BTreeSet<String> = input
            .items
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .chain(crate::split_list(&input.extra))
            .collect();

        tracing::info!(count = items.len(), "fridge replaced");

        self.profile.fridge_items = items;
        self.commit()
    }

    /// Merges raw names into the fridge; returns how many were new.
    pub fn add_fridge_items<I, T>(&mut self, items: I) -> dailykitchen_shared::Result<usize>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut added = 0;
        for item in items {
            let item = item.as_ref().trim();
            if !item.is_empty() && self.profile.fridge_items.insert(item.to_owned()) {
                added += 1;
            }
        }

        if added > 0 {
            self.commit()?;
        }

        tracing::info!(added, "fridge items merged");

        Ok(added)
    }

    pub fn scan_fridge(
        &mut self,
        scanner: &impl PantryScanner,
        image: &[u8],
    ) -> dailykitchen_shared::Result<usize> {
        let items = scanner.scan(image)?;
        self.add_fridge_items(items)
    }
}
