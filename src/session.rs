use dailykitchen_mealplan::{
    DailyMenu, HistoryEntry, HistoryStore, JsonHistoryStore, Pantry, Planner, Selector,
};
use dailykitchen_recipe::{Catalog, Recipe, SynonymTable};
use dailykitchen_shared::mealplan::{MealSlot, PoolKey};
use dailykitchen_shared::user::{AllergenMatch, Feedback};
use dailykitchen_shopping::CategorizationService;
use dailykitchen_user::{
    Command, JsonProfileStore, PantryScanner, Profile, ProfileStore, SetNicknameInput,
    UpdateAllergensInput, UpdateFridgeInput, write_json,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use time::Date;

use crate::Config;

/// Everything one user interaction needs: catalog, profile, today's menu,
/// history and the random source. Passed explicitly, never global.
pub struct Session<P, H> {
    catalog: Catalog,
    synonyms: SynonymTable,
    command: Command<P>,
    history: H,
    menu: DailyMenu,
    menu_path: Option<PathBuf>,
    policy: AllergenMatch,
    rng: StdRng,
}

impl Session<JsonProfileStore, JsonHistoryStore> {
    /// Opens the file-backed session described by `config`.
    pub fn open(config: &Config) -> dailykitchen_shared::Result<Self> {
        let catalog = match &config.data.catalog_file {
            Some(path) => Catalog::load(path)?,
            None => Catalog::builtin()?,
        };
        let command = Command::load(JsonProfileStore::new(config.data.profile_path()))?;
        let history = JsonHistoryStore::new(config.data.history_path());
        let rng = match config.planner.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let menu_path = config.data.menu_path();
        let menu = read_menu(&menu_path)?;

        let mut session = Session::new(catalog, command, history, rng)?
            .with_policy(config.planner.allergen_match)
            .with_menu(menu);
        session.menu_path = Some(menu_path);

        Ok(session)
    }
}

impl<P: ProfileStore, H: HistoryStore> Session<P, H> {
    pub fn new(
        catalog: Catalog,
        command: Command<P>,
        history: H,
        rng: StdRng,
    ) -> dailykitchen_shared::Result<Self> {
        Ok(Self {
            synonyms: catalog.synonym_table()?,
            catalog,
            command,
            history,
            menu: DailyMenu::default(),
            menu_path: None,
            policy: AllergenMatch::default(),
            rng,
        })
    }

    pub fn with_policy(mut self, policy: AllergenMatch) -> Self {
        self.policy = policy;
        self
    }

    /// Resumes a previously planned menu; its shopping list is recomputed
    /// against the current fridge.
    pub fn with_menu(mut self, menu: DailyMenu) -> Self {
        self.menu = menu;
        let pantry = Pantry::new(&self.command.profile().fridge_items, &self.synonyms);
        self.menu.refresh_shopping_list(&pantry);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn synonyms(&self) -> &SynonymTable {
        &self.synonyms
    }

    pub fn profile(&self) -> &Profile {
        self.command.profile()
    }

    pub fn menu(&self) -> &DailyMenu {
        &self.menu
    }

    pub fn pantry(&self) -> Pantry<'_> {
        Pantry::new(&self.command.profile().fridge_items, &self.synonyms)
    }

    pub fn categorizer(&self) -> CategorizationService<'_> {
        CategorizationService::new(self.catalog.fridge_categories(), &self.synonyms)
    }

    fn persist_menu(&self) -> dailykitchen_shared::Result<()> {
        match &self.menu_path {
            Some(path) => write_json(path, &self.menu),
            None => Ok(()),
        }
    }

    /// Shopping list follows every fridge change.
    fn pantry_changed(&mut self) -> dailykitchen_shared::Result<()> {
        let pantry = Pantry::new(&self.command.profile().fridge_items, &self.synonyms);
        self.menu.refresh_shopping_list(&pantry);
        self.persist_menu()
    }

    #[tracing::instrument(skip(self))]
    pub fn generate(&mut self) -> dailykitchen_shared::Result<&DailyMenu> {
        let selector = Selector::new(self.command.profile(), &self.synonyms, self.policy);
        Planner::new(&self.catalog, selector).generate(&mut self.menu, &mut self.rng);
        self.persist_menu()?;

        Ok(&self.menu)
    }

    /// Replaces one slot; `pool` defaults to the slot's own pool.
    ///
    /// The fruit slot only takes the fruit pool, and dish slots never do.
    #[tracing::instrument(skip(self))]
    pub fn swap(
        &mut self,
        slot: MealSlot,
        pool: Option<PoolKey>,
    ) -> dailykitchen_shared::Result<bool> {
        let pool = pool.unwrap_or_else(|| slot.pool_key());
        if (pool == PoolKey::Fruit) != (slot.pool_key() == PoolKey::Fruit) {
            dailykitchen_shared::user!("slot {} cannot take dishes from pool {}", slot, pool);
        }

        let selector = Selector::new(self.command.profile(), &self.synonyms, self.policy);
        let planner = Planner::new(&self.catalog, selector);
        let swapped = planner.swap(&mut self.menu, slot, pool, &mut self.rng);

        if swapped {
            self.persist_menu()?;
        }

        Ok(swapped)
    }

    #[tracing::instrument(skip(self))]
    pub fn toggle(
        &mut self,
        name: &str,
        feedback: Feedback,
    ) -> dailykitchen_shared::Result<Option<Feedback>> {
        self.command.toggle(name, feedback)
    }

    #[tracing::instrument(skip(self, input))]
    pub fn set_nickname(&mut self, input: SetNicknameInput) -> dailykitchen_shared::Result<()> {
        self.command.set_nickname(input)
    }

    /// Takes effect from the next generate or swap.
    #[tracing::instrument(skip(self, input))]
    pub fn update_allergens(
        &mut self,
        input: UpdateAllergensInput,
    ) -> dailykitchen_shared::Result<()> {
        self.command.update_allergens(input)
    }

    #[tracing::instrument(skip(self, input))]
    pub fn update_fridge(&mut self, input: UpdateFridgeInput) -> dailykitchen_shared::Result<()> {
        self.command.update_fridge(input)?;
        self.pantry_changed()
    }

    #[tracing::instrument(skip(self))]
    pub fn add_fridge_items(&mut self, input: &str) -> dailykitchen_shared::Result<usize> {
        let added = self
            .command
            .add_fridge_items(dailykitchen_user::split_list(input))?;
        self.pantry_changed()?;

        Ok(added)
    }

    #[tracing::instrument(skip(self, scanner, image))]
    pub fn scan_fridge(
        &mut self,
        scanner: &impl PantryScanner,
        image: &[u8],
    ) -> dailykitchen_shared::Result<usize> {
        let added = self.command.scan_fridge(scanner, image)?;
        self.pantry_changed()?;

        Ok(added)
    }

    #[tracing::instrument(skip(self))]
    pub fn restock(&mut self) -> dailykitchen_shared::Result<usize> {
        let added =
            dailykitchen_shopping::restock(&mut self.command, &mut self.menu, &self.synonyms)?;
        self.persist_menu()?;

        Ok(added)
    }

    /// The dish to cook for a slot, if one is planned.
    pub fn cook(&self, slot: MealSlot) -> dailykitchen_shared::Result<&Recipe> {
        match self.menu.dish(slot) {
            Some(recipe) => Ok(recipe),
            None => dailykitchen_shared::not_found!("no dish planned for {}", slot),
        }
    }

    /// Any catalog recipe by exact name, planned or not.
    pub fn recipe(&self, name: &str) -> dailykitchen_shared::Result<&Recipe> {
        match self.catalog.find(name.trim()) {
            Some(recipe) => Ok(recipe),
            None => dailykitchen_shared::not_found!("no recipe named '{}'", name.trim()),
        }
    }

    #[tracing::instrument(skip(self))]
    pub fn save_history(&mut self, date: Date) -> dailykitchen_shared::Result<HistoryEntry> {
        if self.menu.is_empty() {
            dailykitchen_shared::user!("nothing planned yet, generate a menu first");
        }

        let entry = HistoryEntry::snapshot(&self.menu, date)?;
        self.history.append(entry.clone())?;
        tracing::info!(date = %entry.date, "menu saved to history");

        Ok(entry)
    }

    pub fn history(&self, limit: usize) -> dailykitchen_shared::Result<Vec<HistoryEntry>> {
        self.history.recent(limit)
    }
}

fn read_menu(path: &std::path::Path) -> dailykitchen_shared::Result<DailyMenu> {
    if !path.exists() {
        return Ok(DailyMenu::default());
    }

    let content = std::fs::read_to_string(path)?;
    match serde_json::from_str(&content) {
        Ok(menu) => Ok(menu),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "unreadable menu, starting empty");
            Ok(DailyMenu::default())
        }
    }
}
