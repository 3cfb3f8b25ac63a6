use crate::{Profile, ProfileStore};

mod allergens;
mod feedback;
mod fridge;
mod nickname;

pub use allergens::UpdateAllergensInput;
pub use fridge::UpdateFridgeInput;
pub use nickname::SetNicknameInput;

/// Profile mutations. Each one saves through the store before returning.
pub struct Command<S> {
    store: S,
    profile: Profile,
}

impl<S: ProfileStore> Command<S> {
    pub fn load(store: S) -> dailykitchen_shared::Result<Self> {
        let profile = store.load()?;

        Ok(Self { store, profile })
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn commit(&self) -> dailykitchen_shared::Result<()> {
        self.store.save(&self.profile)
    }
}
