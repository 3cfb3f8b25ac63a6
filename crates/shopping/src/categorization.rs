use dailykitchen_recipe::SynonymTable;
use std::collections::BTreeMap;

/// Group for items no catalog category claims.
pub const OTHER_CATEGORY: &str = "其他";

/// Sorts ingredient names into the catalog's fridge categories.
///
/// An item belongs to the first category listing it verbatim, then to the
/// first one listing its canonical name, otherwise to [`OTHER_CATEGORY`].
pub struct CategorizationService<'a> {
    categories: &'a BTreeMap<String, Vec<String>>,
    synonyms: &'a SynonymTable,
}

impl<'a> CategorizationService<'a> {
    pub fn new(categories: &'a BTreeMap<String, Vec<String>>, synonyms: &'a SynonymTable) -> Self {
        Self {
            categories,
            synonyms,
        }
    }

    pub fn categorize(&self, ingredient: &str) -> &'a str {
        let ingredient = ingredient.trim();
        let canonical = self.synonyms.canonical(ingredient);

        self.find(|item| item == ingredient)
            .or_else(|| self.find(|item| self.synonyms.canonical(item) == canonical))
            .unwrap_or(OTHER_CATEGORY)
    }

    fn find(&self, pred: impl Fn(&str) -> bool) -> Option<&'a str> {
        self.categories
            .iter()
            .find(|(_, items)| items.iter().any(|item| pred(item)))
            .map(|(name, _)| name.as_str())
    }

    /// Groups in catalog order with the catch-all last; empty groups are
    /// dropped.
    pub fn group<I, T>(&self, items: I) -> Vec<(&'a str, Vec<String>)>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut groups: BTreeMap<&'a str, Vec<String>> = BTreeMap::new();
        for item in items {
            let item = item.as_ref();
            groups
                .entry(self.categorize(item))
                .or_default()
                .push(item.trim().to_owned());
        }

        let mut ordered: Vec<(&'a str, Vec<String>)> = self
            .categories
            .keys()
            .filter_map(|name| groups.remove_entry(name.as_str()))
            .collect();

        if let Some(other) = groups.remove(OTHER_CATEGORY) {
            ordered.push((OTHER_CATEGORY, other));
        }

        ordered
    }
}
