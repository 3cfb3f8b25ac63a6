use dailykitchen_recipe::{Recipe, SynonymTable, is_red_meat};
use dailykitchen_shared::user::AllergenMatch;
use dailykitchen_user::Profile;
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use strum::{AsRefStr, Display, EnumString};

use crate::{Pantry, is_safe, weight};

/// Extra constraint a slot may put on its dish.
#[derive(
    EnumString,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Prefer {
    #[default]
    None,
    /// Skip anything with a red-meat ingredient.
    WhiteMeat,
}

/// A surviving recipe paired with its availability score. The catalog entry
/// itself is only borrowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'r> {
    pub recipe: &'r Recipe,
    pub missing: usize,
}

impl Candidate<'_> {
    pub fn is_available(&self) -> bool {
        self.missing == 0
    }
}

/// Picks one dish from a pool for the current profile.
#[derive(Debug, Clone)]
pub struct Selector<'a> {
    pantry: Pantry<'a>,
    allergens: &'a BTreeSet<String>,
    likes: &'a BTreeSet<String>,
    dislikes: &'a BTreeSet<String>,
    policy: AllergenMatch,
}

impl<'a> Selector<'a> {
    pub fn new(profile: &'a Profile, synonyms: &'a SynonymTable, policy: AllergenMatch) -> Self {
        Self {
            pantry: Pantry::new(&profile.fridge_items, synonyms),
            allergens: &profile.allergens,
            likes: &profile.likes,
            dislikes: &profile.dislikes,
            policy,
        }
    }

    pub fn pantry(&self) -> &Pantry<'a> {
        &self.pantry
    }

    pub fn policy(&self) -> AllergenMatch {
        self.policy
    }

    pub fn allergens(&self) -> &'a BTreeSet<String> {
        self.allergens
    }

    pub fn has_red_meat(&self, recipe: &Recipe) -> bool {
        let synonyms = self.pantry.synonyms();
        recipe
            .ingredients
            .iter()
            .any(|ingredient| is_red_meat(synonyms.canonical(ingredient)))
    }

    /// Safe, non-excluded recipes of the pool with their missing counts.
    pub fn candidates<'r>(
        &self,
        pool: &'r [Recipe],
        exclude: &[&str],
        prefer: Prefer,
    ) -> Vec<Candidate<'r>> {
        pool.iter()
            .filter(|recipe| !exclude.contains(&recipe.name.as_str()))
            .filter(|recipe| is_safe(recipe, self.allergens, self.policy))
            .filter(|recipe| prefer != Prefer::WhiteMeat || !self.has_red_meat(recipe))
            .map(|recipe| Candidate {
                recipe,
                missing: self.pantry.missing_count(recipe),
            })
            .collect()
    }

    pub fn weight(&self, candidate: &Candidate<'_>) -> u32 {
        let name = candidate.recipe.name.as_str();
        weight(
            candidate.missing,
            self.likes.contains(name),
            self.dislikes.contains(name),
        )
    }

    /// Weighted random pick. Recipes cookable right now win whenever at
    /// least one exists; `None` only when nothing passes the filters.
    pub fn select<'r, R: Rng + ?Sized>(
        &self,
        pool: &'r [Recipe],
        exclude: &[&str],
        prefer: Prefer,
        rng: &mut R,
    ) -> Option<&'r Recipe> {
        let candidates = tier(self.candidates(pool, exclude, prefer));
        if candidates.is_empty() {
            tracing::debug!(pool = pool.len(), ?exclude, %prefer, "no candidate survived");
            return None;
        }

        let dist = match WeightedIndex::new(candidates.iter().map(|c| self.weight(c))) {
            Ok(dist) => dist,
            Err(e) => {
                tracing::warn!(error = %e, "invalid selection weights");
                return None;
            }
        };

        let picked = candidates[dist.sample(rng)];
        tracing::debug!(
            pool = pool.len(),
            candidates = candidates.len(),
            dish = %picked.recipe.name,
            missing = picked.missing,
            "dish selected"
        );

        Some(picked.recipe)
    }
}

/// Keeps only fully available candidates when there are any.
pub fn tier(candidates: Vec<Candidate<'_>>) -> Vec<Candidate<'_>> {
    if candidates.iter().any(Candidate::is_available) {
        candidates.into_iter().filter(Candidate::is_available).collect()
    } else {
        candidates
    }
}
