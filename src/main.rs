use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand};
use dailykitchen_shared::mealplan::{MealSlot, PoolKey};
use dailykitchen_shared::user::Feedback;
use std::path::PathBuf;

mod cli;

/// dailykitchen - daily meal plans from what is in your fridge
#[derive(Parser)]
#[command(name = "dailykitchen")]
#[command(about = "Daily meal planning with allergen and pantry awareness", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan today's menu and print it
    Generate,
    /// Replace one slot of the current menu
    Swap {
        slot: MealSlot,
        /// Pick from another pool instead of the slot's own
        #[arg(long)]
        pool: Option<PoolKey>,
    },
    /// Toggle a like on a dish
    Like { name: String },
    /// Toggle a dislike on a dish
    Dislike { name: String },
    /// Nickname and allergens
    #[command(subcommand)]
    Profile(ProfileCommands),
    /// Pantry content
    #[command(subcommand)]
    Fridge(FridgeCommands),
    /// Move the shopping list into the fridge
    Restock,
    /// Show how to cook a dish
    Cook {
        /// Planned slot (e.g. lunch_meat) or any dish name from the catalog
        target: String,
    },
    /// Save the current menu into history
    Save,
    /// Show saved menus, most recent first
    History {
        #[arg(long, default_value_t = 5)]
        limit: usize,
    },
}

#[derive(Subcommand)]
enum ProfileCommands {
    Show,
    Nickname {
        name: String,
    },
    /// Replace the allergen list
    Allergens {
        /// Common allergens, comma separated
        #[arg(
            long,
            value_delimiter = ',',
            value_parser = PossibleValuesParser::new(dailykitchen_user::COMMON_ALLERGENS.iter().copied())
        )]
        common: Vec<String>,
        /// Anything else, comma separated
        #[arg(long, default_value = "")]
        custom: String,
    },
}

#[derive(Subcommand)]
enum FridgeCommands {
    /// List fridge content by category
    Show,
    /// Replace the fridge content
    Set {
        items: Vec<String>,
        /// Extra items, comma separated
        #[arg(long, default_value = "")]
        extra: String,
    },
    /// Add comma separated items
    Add { items: String },
    /// Recognize items from a fridge photo
    Scan { image: Option<PathBuf> },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = dailykitchen::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    dailykitchen::observability::init_observability(
        &config.logging.level,
        &config.logging.format,
    )?;

    let mut session = dailykitchen::Session::open(&config)?;

    match cli.command {
        Commands::Generate => cli::menu::generate(&mut session),
        Commands::Swap { slot, pool } => cli::menu::swap(&mut session, slot, pool),
        Commands::Like { name } => cli::profile::feedback(&mut session, &name, Feedback::Like),
        Commands::Dislike { name } => cli::profile::feedback(&mut session, &name, Feedback::Dislike),
        Commands::Profile(ProfileCommands::Show) => cli::profile::show(&session),
        Commands::Profile(ProfileCommands::Nickname { name }) => {
            cli::profile::nickname(&mut session, name)
        }
        Commands::Profile(ProfileCommands::Allergens { common, custom }) => {
            cli::profile::allergens(&mut session, common, custom)
        }
        Commands::Fridge(FridgeCommands::Show) => cli::fridge::show(&session),
        Commands::Fridge(FridgeCommands::Set { items, extra }) => {
            cli::fridge::set(&mut session, items, extra)
        }
        Commands::Fridge(FridgeCommands::Add { items }) => cli::fridge::add(&mut session, &items),
        Commands::Fridge(FridgeCommands::Scan { image }) => {
            cli::fridge::scan(&mut session, image.as_deref())
        }
        Commands::Restock => cli::fridge::restock(&mut session),
        Commands::Cook { target } => cli::menu::cook(&session, &target),
        Commands::Save => cli::menu::save(&mut session),
        Commands::History { limit } => cli::menu::history(&session, limit),
    }
}
