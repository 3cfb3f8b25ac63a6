use dailykitchen_shared::user::Feedback;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const DEFAULT_NICKNAME: &str = "Bingo";
pub const DEFAULT_ALLERGENS: &[&str] = &["牛肉", "牛奶", "奶粉"];
pub const DEFAULT_FRIDGE: &[&str] = &["鸡蛋", "西红柿"];

/// Allergens offered as one-click choices; anything else is entered as text.
pub const COMMON_ALLERGENS: &[&str] = &["牛肉", "牛奶", "奶粉", "鸡蛋", "虾", "鱼"];

/// Per-user state driving selection. Fields missing from a saved profile keep
/// their defaults.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Profile {
    pub nickname: String,
    pub allergens: BTreeSet<String>,
    /// Raw names as entered or scanned, normalized only at selection time.
    pub fridge_items: BTreeSet<String>,
    pub likes: BTreeSet<String>,
    pub dislikes: BTreeSet<String>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            nickname: DEFAULT_NICKNAME.to_owned(),
            allergens: DEFAULT_ALLERGENS.iter().map(|s| s.to_string()).collect(),
            fridge_items: DEFAULT_FRIDGE.iter().map(|s| s.to_string()).collect(),
            likes: BTreeSet::new(),
            dislikes: BTreeSet::new(),
        }
    }
}

impl Profile {
    /// Profile with no allergens, empty fridge and no feedback.
    pub fn blank(nickname: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
            allergens: BTreeSet::new(),
            fridge_items: BTreeSet::new(),
            likes: BTreeSet::new(),
            dislikes: BTreeSet::new(),
        }
    }

    /// Flips `feedback` for `name`. Turning one side on always clears the
    /// other, so a name is never both liked and disliked.
    pub fn toggle(&mut self, name: &str, feedback: Feedback) {
        let (on, off) = match feedback {
            Feedback::Like => (&mut self.likes, &mut self.dislikes),
            Feedback::Dislike => (&mut self.dislikes, &mut self.likes),
        };

        if !on.remove(name) {
            on.insert(name.to_owned());
            off.remove(name);
        }
    }

    pub fn is_liked(&self, name: &str) -> bool {
        self.likes.contains(name)
    }

    pub fn is_disliked(&self, name: &str) -> bool {
        self.dislikes.contains(name)
    }

    pub fn feedback_for(&self, name: &str) -> Option<Feedback> {
        if self.is_disliked(name) {
            Some(Feedback::Dislike)
        } else if self.is_liked(name) {
            Some(Feedback::Like)
        } else {
            None
        }
    }

    /// Drops likes that are also disliked; returns how many were dropped.
    pub fn resolve_conflicts(&mut self) -> usize {
        let before = self.likes.len();
        let dislikes = &self.dislikes;
        self.likes.retain(|name| !dislikes.contains(name));

        before - self.likes.len()
    }
}
