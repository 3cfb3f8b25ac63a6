use dailykitchen_shared::mealplan::PoolKey;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use validator::Validate;

use crate::{Recipe, SynonymTable};

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// Read-only recipe catalog, loaded once per process.
///
/// Pools are keyed by name so a catalog file may carry categories beyond
/// [`PoolKey`]; fruit is kept apart as bare names.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Catalog {
    #[serde(default)]
    pools: BTreeMap<String, Vec<Recipe>>,
    #[serde(default)]
    fruits: Vec<String>,
    #[serde(default)]
    fridge_categories: BTreeMap<String, Vec<String>>,
    /// Extra aliases on top of the built-in table.
    #[serde(default)]
    synonyms: BTreeMap<String, String>,
}

impl Catalog {
    pub fn builtin() -> dailykitchen_shared::Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn load(path: impl AsRef<Path>) -> dailykitchen_shared::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;

        tracing::info!(
            path = %path.display(),
            pools = catalog.pools.len(),
            fruits = catalog.fruits.len(),
            "catalog loaded"
        );

        Ok(catalog)
    }

    pub fn from_json(content: &str) -> dailykitchen_shared::Result<Self> {
        let catalog: Catalog = serde_json::from_str(content)?;
        catalog.check()?;

        Ok(catalog)
    }

    pub fn with_pool(mut self, key: impl Into<String>, recipes: Vec<Recipe>) -> Self {
        self.pools.insert(key.into(), recipes);
        self
    }

    pub fn with_fruits<I, S>(mut self, fruits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fruits = fruits.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_fridge_category<I, S>(mut self, category: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fridge_categories
            .insert(category.into(), items.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_synonym(mut self, alias: impl Into<String>, canonical: impl Into<String>) -> Self {
        self.synonyms.insert(alias.into(), canonical.into());
        self
    }

    /// Built-in aliases merged with the catalog's own; catalog entries win.
    pub fn synonym_table(&self) -> dailykitchen_shared::Result<SynonymTable> {
        if self.synonyms.is_empty() {
            return Ok(SynonymTable::builtin().clone());
        }

        let table = SynonymTable::builtin().merge(&self.synonyms)?;
        tracing::debug!(
            custom = self.synonyms.len(),
            total = table.len(),
            "catalog synonyms merged"
        );

        Ok(table)
    }

    fn check(&self) -> dailykitchen_shared::Result<()> {
        for (key, recipes) in &self.pools {
            let mut names = HashSet::new();
            for recipe in recipes {
                recipe.validate()?;

                if !names.insert(recipe.name.as_str()) {
                    dailykitchen_shared::user!(
                        "duplicate recipe '{}' in pool '{}'",
                        recipe.name,
                        key
                    );
                }
            }
        }

        self.synonym_table()?;

        Ok(())
    }

    /// Recipes of one pool, empty when the catalog does not carry it.
    pub fn pool(&self, key: PoolKey) -> &[Recipe] {
        self.pool_by_name(key.as_ref())
    }

    pub fn pool_by_name(&self, name: &str) -> &[Recipe] {
        self.pools.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    /// Like [`Catalog::pool`], but an absent or empty dinner pool resolves to
    /// its lunch counterpart.
    pub fn pool_or_fallback(&self, key: PoolKey) -> &[Recipe] {
        let pool = self.pool(key);
        if !pool.is_empty() {
            return pool;
        }

        match key.fallback() {
            Some(fallback) => {
                tracing::debug!(pool = %key, fallback = %fallback, "pool empty, using fallback");
                self.pool(fallback)
            }
            None => pool,
        }
    }

    pub fn fruits(&self) -> &[String] {
        &self.fruits
    }

    pub fn fridge_categories(&self) -> &BTreeMap<String, Vec<String>> {
        &self.fridge_categories
    }

    pub fn find(&self, name: &str) -> Option<&Recipe> {
        self.pools.values().flatten().find(|r| r.name == name)
    }
}
