pub mod fridge;
pub mod menu;
pub mod profile;

use dailykitchen::Session;
use dailykitchen_mealplan::JsonHistoryStore;
use dailykitchen_user::JsonProfileStore;

pub type FileSession = Session<JsonProfileStore, JsonHistoryStore>;
