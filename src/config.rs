use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use dailykitchen_shared::user::AllergenMatch;
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub planner: PlannerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_profile_file")]
    pub profile_file: String,
    #[serde(default = "default_history_file")]
    pub history_file: String,
    #[serde(default = "default_menu_file")]
    pub menu_file: String,
    /// Recipe catalog JSON; the embedded catalog is used when unset.
    #[serde(default)]
    pub catalog_file: Option<PathBuf>,
}

impl DataConfig {
    pub fn profile_path(&self) -> PathBuf {
        self.dir.join(&self.profile_file)
    }

    pub fn history_path(&self) -> PathBuf {
        self.dir.join(&self.history_file)
    }

    pub fn menu_path(&self) -> PathBuf {
        self.dir.join(&self.menu_file)
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
            profile_file: default_profile_file(),
            history_file: default_history_file(),
            menu_file: default_menu_file(),
            catalog_file: None,
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_profile_file() -> String {
    "profile.json".to_string()
}

fn default_history_file() -> String {
    "history.json".to_string()
}

fn default_menu_file() -> String {
    "menu.json".to_string()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct PlannerConfig {
    #[serde(default)]
    pub allergen_match: AllergenMatch,
    /// Fixed RNG seed for reproducible plans.
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// `pretty` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DAILYKITCHEN__DATA__DIR, etc.)
    /// 2. Config file given by path or CONFIG_PATH
    /// 3. Defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("data.dir", "data")?
            .set_default("planner.allergen_match", "substring")?
            .set_default("logging.level", default_log_level())?
            .set_default("logging.format", default_log_format())?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, missing file means defaults
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("DAILYKITCHEN")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("data.profile_file", &self.data.profile_file),
            ("data.history_file", &self.data.history_file),
            ("data.menu_file", &self.data.menu_file),
        ] {
            if value.trim().is_empty() {
                return Err(format!("{name} must not be empty"));
            }
        }
        if self.data.profile_file == self.data.history_file
            || self.data.profile_file == self.data.menu_file
            || self.data.history_file == self.data.menu_file
        {
            return Err("data files must be distinct".to_string());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(format!(
                "Unknown log format '{}', expected 'pretty' or 'json'",
                self.logging.format
            ));
        }
        if self.logging.level.trim().is_empty() {
            return Err("Log level must not be empty".to_string());
        }
        Ok(())
    }
}
