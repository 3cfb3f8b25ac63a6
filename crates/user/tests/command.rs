use dailykitchen_shared::user::Feedback;
use dailykitchen_user::{
    Command, JsonProfileStore, MemoryProfileStore, MockScanner, Profile, ProfileStore,
    SetNicknameInput, UpdateAllergensInput, UpdateFridgeInput,
};
use temp_dir::TempDir;

#[test]
fn test_every_toggle_is_saved() -> anyhow::Result<()> {
    let store = MemoryProfileStore::new(Profile::blank("tester"));
    let mut command = Command::load(&store)?;

    assert_eq!(command.toggle("红烧排骨", Feedback::Like)?, Some(Feedback::Like));
    assert_eq!(command.toggle("红烧排骨", Feedback::Dislike)?, Some(Feedback::Dislike));
    assert_eq!(command.toggle("红烧排骨", Feedback::Dislike)?, None);

    assert_eq!(store.saves(), 3);
    let saved = store.snapshot().unwrap();
    assert!(saved.likes.is_empty());
    assert!(saved.dislikes.is_empty());

    Ok(())
}

#[test]
fn test_blank_dish_name_is_rejected() {
    let store = MemoryProfileStore::new(Profile::blank("tester"));
    let mut command = Command::load(&store).unwrap();

    let result = command.toggle("  ", Feedback::Like);

    assert!(matches!(result, Err(dailykitchen_shared::Error::User(_))));
    assert_eq!(store.saves(), 0);
}

#[test]
fn test_allergens_merge_common_and_custom() -> anyhow::Result<()> {
    let store = MemoryProfileStore::new(Profile::blank("tester"));
    let mut command = Command::load(&store)?;

    command.update_allergens(UpdateAllergensInput {
        common: vec!["牛奶".to_owned(), "虾".to_owned()],
        custom: "花生, 芒果,，虾".to_owned(),
    })?;

    let allergens: Vec<&str> = command
        .profile()
        .allergens
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(allergens.len(), 4);
    for expected in ["牛奶", "虾", "花生", "芒果"] {
        assert!(allergens.contains(&expected), "{expected} missing");
    }
    assert_eq!(store.saves(), 1);

    Ok(())
}

#[test]
fn test_update_fridge_replaces_items() -> anyhow::Result<()> {
    let store = MemoryProfileStore::new(Profile::default());
    let mut command = Command::load(&store)?;

    command.update_fridge(UpdateFridgeInput {
        items: vec!["土豆".to_owned(), " ".to_owned()],
        extra: "黄瓜, 大蒜".to_owned(),
    })?;

    let fridge = &command.profile().fridge_items;
    assert_eq!(fridge.len(), 3);
    assert!(!fridge.contains("鸡蛋"));
    assert!(fridge.contains("黄瓜"));

    Ok(())
}

#[test]
fn test_scan_merges_raw_names() -> anyhow::Result<()> {
    let store = MemoryProfileStore::new(Profile::default());
    let mut command = Command::load(&store)?;

    // 西红柿 is already in the default fridge.
    let added = command.scan_fridge(&MockScanner, b"jpeg bytes")?;

    assert_eq!(added, 2);
    let fridge = &command.profile().fridge_items;
    assert!(fridge.contains("基围虾"));
    assert!(fridge.contains("娃娃菜"));
    assert_eq!(store.saves(), 1);

    Ok(())
}

#[test]
fn test_adding_nothing_new_does_not_save() -> anyhow::Result<()> {
    let store = MemoryProfileStore::new(Profile::default());
    let mut command = Command::load(&store)?;

    assert_eq!(command.add_fridge_items(["鸡蛋", "", "西红柿"])?, 0);
    assert_eq!(store.saves(), 0);

    Ok(())
}

#[test]
fn test_nickname_is_validated() -> anyhow::Result<()> {
    let store = MemoryProfileStore::new(Profile::default());
    let mut command = Command::load(&store)?;

    let result = command.set_nickname(SetNicknameInput {
        nickname: "   ".to_owned(),
    });
    assert!(matches!(result, Err(dailykitchen_shared::Error::Validate(_))));

    command.set_nickname(SetNicknameInput {
        nickname: " Bluey ".to_owned(),
    })?;
    assert_eq!(command.profile().nickname, "Bluey");

    Ok(())
}

#[test]
fn test_json_store_round_trip() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let store = JsonProfileStore::new(dir.child("data").join("profile.json"));

    let mut command = Command::load(&store)?;
    assert_eq!(command.profile(), &Profile::default());

    command.toggle("宫保鸡丁", Feedback::Like)?;
    command.add_fridge_items(["土豆"])?;

    let reloaded = store.load()?;
    assert!(reloaded.is_liked("宫保鸡丁"));
    assert!(reloaded.fridge_items.contains("土豆"));
    assert_eq!(reloaded.nickname, "Bingo");

    Ok(())
}

#[test]
fn test_json_store_tolerates_garbage() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("profile.json");
    std::fs::write(&path, "{ this is not json")?;

    let profile = JsonProfileStore::new(&path).load()?;

    assert_eq!(profile, Profile::default());

    Ok(())
}

#[test]
fn test_json_store_merges_saved_fields_over_defaults() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("profile.json");
    std::fs::write(
        &path,
        r#"{"nickname":"Bluey","likes":["a","b"],"dislikes":["a"]}"#,
    )?;

    let profile = JsonProfileStore::new(&path).load()?;

    assert_eq!(profile.nickname, "Bluey");
    assert!(profile.allergens.contains("奶粉"));
    assert!(!profile.is_liked("a"));
    assert!(profile.is_disliked("a"));
    assert!(profile.is_liked("b"));

    Ok(())
}
