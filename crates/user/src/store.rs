use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

use crate::Profile;

/// Durable home of the [`Profile`]. Every mutation is saved before the next
/// read in the same session.
pub trait ProfileStore {
    fn load(&self) -> dailykitchen_shared::Result<Profile>;
    fn save(&self, profile: &Profile) -> dailykitchen_shared::Result<()>;
}

/// Profile kept as one pretty-printed JSON document.
#[derive(Debug, Clone)]
pub struct JsonProfileStore {
    path: PathBuf,
}

impl JsonProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProfileStore for JsonProfileStore {
    fn load(&self) -> dailykitchen_shared::Result<Profile> {
        if !self.path.exists() {
            return Ok(Profile::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let mut profile = match serde_json::from_str::<Profile>(&content) {
            Ok(profile) => profile,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "unreadable profile, using defaults"
                );
                return Ok(Profile::default());
            }
        };

        let dropped = profile.resolve_conflicts();
        if dropped > 0 {
            tracing::warn!(dropped, "names were both liked and disliked, kept the dislike");
        }

        Ok(profile)
    }

    fn save(&self, profile: &Profile) -> dailykitchen_shared::Result<()> {
        write_json(&self.path, profile)
    }
}

/// Writes through a sibling temp file so a crash never leaves half a document.
pub fn write_json<T: serde::Serialize>(
    path: &Path,
    value: &T,
) -> dailykitchen_shared::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let content = serde_json::to_string_pretty(value)?;
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, content)?;
    std::fs::rename(&tmp, path)?;

    Ok(())
}

/// In-process store, mostly for tests.
#[derive(Debug, Default)]
pub struct MemoryProfileStore {
    profile: RefCell<Option<Profile>>,
    saves: Cell<usize>,
}

impl MemoryProfileStore {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile: RefCell::new(Some(profile)),
            saves: Cell::new(0),
        }
    }

    pub fn saves(&self) -> usize {
        self.saves.get()
    }

    pub fn snapshot(&self) -> Option<Profile> {
        self.profile.borrow().clone()
    }
}

impl ProfileStore for MemoryProfileStore {
    fn load(&self) -> dailykitchen_shared::Result<Profile> {
        Ok(self.profile.borrow().clone().unwrap_or_default())
    }

    fn save(&self, profile: &Profile) -> dailykitchen_shared::Result<()> {
        self.profile.replace(Some(profile.clone()));
        self.saves.set(self.saves.get() + 1);

        Ok(())
    }
}

impl<S: ProfileStore + ?Sized> ProfileStore for &S {
    fn load(&self) -> dailykitchen_shared::Result<Profile> {
        (**self).load()
    }

    fn save(&self, profile: &Profile) -> dailykitchen_shared::Result<()> {
        (**self).save(profile)
    }
}
