use std::collections::BTreeSet;
use validator::Validate;

use crate::ProfileStore;

#[derive(Validate, Default)]
pub struct UpdateAllergensInput {
    /// Picked from [`crate::COMMON_ALLERGENS`].
    pub common: Vec<String>,
    /// Comma-separated free text.
    #[validate(length(max = 200))]
    pub custom: String,
}

impl<S: ProfileStore> super::Command<S> {
    /// Replaces the allergen set with the picked and typed entries.
    pub fn update_allergens(
        &mut self,
        input: UpdateAllergensInput,
    ) -> dailykitchen_shared::Result<()> {
        input.validate()?;

        let allergens: BTreeSet<String> = input
            .common
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .chain(crate::split_list(&input.custom))
            .collect();

        tracing::info!(count = allergens.len(), "allergens updated");

        self.profile.allergens = allergens;
        self.commit()
    }
}
