use dailykitchen_recipe::{Recipe, SynonymTable};
use std::collections::HashSet;

/// Fridge content in canonical form, normalized once per selection pass.
#[derive(Debug, Clone)]
pub struct Pantry<'a> {
    synonyms: &'a SynonymTable,
    items: HashSet<String>,
}

impl<'a> Pantry<'a> {
    pub fn new<I, T>(items: I, synonyms: &'a SynonymTable) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        Self {
            synonyms,
            items: items
                .into_iter()
                .map(|item| synonyms.normalize(item.as_ref()))
                .collect(),
        }
    }

    pub fn synonyms(&self) -> &'a SynonymTable {
        self.synonyms
    }

    /// Whether the raw ingredient name is covered by something in the fridge.
    pub fn has(&self, ingredient: &str) -> bool {
        self.items.contains(self.synonyms.canonical(ingredient))
    }

    /// Raw names of the recipe's ingredients the fridge lacks.
    pub fn missing<'r>(&self, recipe: &'r Recipe) -> impl Iterator<Item = &'r str> {
        recipe
            .ingredients
            .iter()
            .map(String::as_str)
            .filter(|ingredient| !self.has(ingredient))
    }

    /// 0 means the recipe can be cooked right now.
    pub fn missing_count(&self, recipe: &Recipe) -> usize {
        self.missing(recipe).count()
    }
}
