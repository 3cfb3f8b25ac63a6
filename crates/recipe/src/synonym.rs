use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

const BUILTIN_SYNONYMS: &[(&str, &str)] = &[
    ("番茄", "西红柿"),
    ("洋柿子", "西红柿"),
    ("洋芋", "土豆"),
    ("马铃薯", "土豆"),
    ("大虾", "虾仁"),
    ("基围虾", "虾仁"),
    ("花菜", "西兰花"),
    ("圆白菜", "青菜"),
    ("白菜", "青菜"),
    ("娃娃菜", "青菜"),
    ("牛腩", "牛肉"),
    ("肥牛", "牛肉"),
    ("肉末", "猪肉"),
    ("里脊", "猪肉"),
    ("排骨", "猪肉"),
    ("鸡腿", "鸡肉"),
    ("鸡翅", "鸡肉"),
    ("龙利鱼", "鱼"),
    ("巴沙鱼", "鱼"),
    ("鳕鱼", "鱼"),
];

static BUILTIN: LazyLock<SynonymTable> = LazyLock::new(|| {
    SynonymTable::new(BUILTIN_SYNONYMS.iter().copied()).unwrap_or_else(|err| {
        tracing::error!(%err, "built-in synonym table rejected");
        SynonymTable::default()
    })
});

/// Maps ingredient aliases to their canonical name.
///
/// Every stored value is a final name: alias chains are followed to their
/// end on construction, so `normalize` is idempotent.
#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    entries: HashMap<String, String>,
}

impl SynonymTable {
    pub fn new<I, K, V>(entries: I) -> dailykitchen_shared::Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        Self::default().merge(entries)
    }

    pub fn builtin() -> &'static SynonymTable {
        &BUILTIN
    }

    /// Copy of this table with `extra` layered on top.
    ///
    /// An entry mapping a name to itself marks that name canonical. Fails
    /// when the aliases form a cycle.
    pub fn merge<I, K, V>(&self, extra: I) -> dailykitchen_shared::Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut entries = self.entries.clone();
        entries.extend(
            extra
                .into_iter()
                .map(|(k, v)| (k.as_ref().trim().to_owned(), v.as_ref().trim().to_owned())),
        );
        entries.retain(|alias, canonical| alias != canonical);

        let mut resolved = HashMap::with_capacity(entries.len());
        for alias in entries.keys() {
            resolved.insert(alias.clone(), resolve(&entries, alias)?);
        }

        Ok(Self { entries: resolved })
    }

    /// Trimmed input, or its canonical form when the table knows it.
    pub fn canonical<'a>(&'a self, raw: &'a str) -> &'a str {
        let trimmed = raw.trim();
        self.entries
            .get(trimmed)
            .map(String::as_str)
            .unwrap_or(trimmed)
    }

    pub fn normalize(&self, raw: &str) -> String {
        self.canonical(raw).to_owned()
    }

    /// True when no canonical name is itself an alias of something else.
    pub fn is_idempotent(&self) -> bool {
        self.entries
            .values()
            .all(|canonical| self.canonical(canonical) == canonical)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn resolve(entries: &HashMap<String, String>, alias: &str) -> dailykitchen_shared::Result<String> {
    let mut seen = HashSet::from([alias]);
    let mut current = alias;

    while let Some(next) = entries.get(current) {
        if !seen.insert(next.as_str()) {
            dailykitchen_shared::user!("synonym cycle through '{}'", alias);
        }
        current = next.as_str();
    }

    Ok(current.to_owned())
}
