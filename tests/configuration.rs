//! Tests for configuration system

use dailykitchen::Config;
use dailykitchen_shared::user::AllergenMatch;
use std::path::PathBuf;
use temp_dir::TempDir;

#[test]
fn test_config_loads_from_default_toml() -> anyhow::Result<()> {
    let config = Config::load(None)?;

    assert_eq!(config.data.dir, PathBuf::from("data"));
    assert_eq!(config.data.profile_file, "profile.json");
    assert_eq!(config.data.history_file, "history.json");
    assert_eq!(config.data.menu_file, "menu.json");
    assert_eq!(config.planner.allergen_match, AllergenMatch::Substring);
    assert_eq!(config.logging.format, "pretty");
    assert!(config.validate().is_ok());

    Ok(())
}

#[test]
fn test_config_file_overrides_defaults() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("kitchen.toml");
    std::fs::write(
        &path,
        r#"
[data]
dir = "/var/lib/kitchen"
catalog_file = "/etc/kitchen/catalog.json"

[planner]
allergen_match = "exact"
seed = 7

[logging]
format = "json"
"#,
    )?;

    let config = Config::load(Some(path.to_string_lossy().into_owned()))?;

    assert_eq!(config.data.dir, PathBuf::from("/var/lib/kitchen"));
    assert_eq!(config.data.profile_file, "profile.json");
    assert_eq!(
        config.data.catalog_file,
        Some(PathBuf::from("/etc/kitchen/catalog.json"))
    );
    assert_eq!(config.planner.allergen_match, AllergenMatch::Exact);
    assert_eq!(config.planner.seed, Some(7));
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.logging.level, "warn");

    Ok(())
}

#[test]
fn test_missing_config_file_falls_back_to_defaults() -> anyhow::Result<()> {
    let config = Config::load(Some("does/not/exist.toml".to_string()))?;

    assert_eq!(config.data.menu_file, "menu.json");
    assert_eq!(config.planner.seed, None);

    Ok(())
}

#[test]
fn test_unknown_allergen_match_is_rejected() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("bad.toml");
    std::fs::write(&path, "[planner]\nallergen_match = \"fuzzy\"\n")?;

    assert!(Config::load(Some(path.to_string_lossy().into_owned())).is_err());

    Ok(())
}
