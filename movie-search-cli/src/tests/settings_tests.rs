use std::collections::HashMap;
use std::path::PathBuf;

use super::*;

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_apply_without_env_or_file() {
    let s = resolve(env_from(&[]), SettingsFile::default()).unwrap();
    assert_eq!(s.catalog_db, PathBuf::from("sakila.db"));
    assert_eq!(s.history_collection, "search_history");
    assert_eq!(s.page_size, 10);
    assert!(s.history_db.ends_with("movie-search/history.db"));
}

#[test]
fn file_values_override_defaults() {
    let file = parse_settings(
        r#"
[catalog]
path = "/data/sakila.db"

[history]
path = "/data/history.db"
collection = "final_project-history"

[display]
page_size = 5
"#,
    )
    .unwrap();
    let s = resolve(env_from(&[]), file).unwrap();
    assert_eq!(s.catalog_db, PathBuf::from("/data/sakila.db"));
    assert_eq!(s.history_db, PathBuf::from("/data/history.db"));
    assert_eq!(s.history_collection, "final_project-history");
    assert_eq!(s.page_size, 5);
}

#[test]
fn env_overrides_file() {
    let file = parse_settings("[catalog]\npath = \"file.db\"\n[display]\npage_size = 5\n").unwrap();
    let env = env_from(&[
        (ENV_CATALOG_DB, "env.db"),
        (ENV_HISTORY_DB, "env-history.db"),
        (ENV_HISTORY_COLLECTION, "env_collection"),
        (ENV_PAGE_SIZE, "20"),
    ]);
    let s = resolve(env, file).unwrap();
    assert_eq!(s.catalog_db, PathBuf::from("env.db"));
    assert_eq!(s.history_db, PathBuf::from("env-history.db"));
    assert_eq!(s.history_collection, "env_collection");
    assert_eq!(s.page_size, 20);
}

#[test]
fn partial_file_keeps_other_defaults() {
    let file = parse_settings("[history]\ncollection = \"h\"\n").unwrap();
    let s = resolve(env_from(&[]), file).unwrap();
    assert_eq!(s.history_collection, "h");
    assert_eq!(s.catalog_db, PathBuf::from("sakila.db"));
}

#[test]
fn invalid_page_sizes_are_config_errors() {
    for raw in ["abc", "0", "-3"] {
        let err = resolve(env_from(&[(ENV_PAGE_SIZE, raw)]), SettingsFile::default()).unwrap_err();
        assert!(matches!(err, CliError::Config(_)), "raw {raw:?}");
    }

    let file = parse_settings("[display]\npage_size = 0\n").unwrap();
    assert!(matches!(
        resolve(env_from(&[]), file),
        Err(CliError::Config(_))
    ));
}

#[test]
fn malformed_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[catalog\npath = ").unwrap();
    assert!(matches!(
        read_settings_file(&path),
        Err(CliError::Config(_))
    ));
}

#[test]
fn explicit_missing_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let err = load(Some(&dir.path().join("missing.toml"))).unwrap_err();
    assert!(err.to_string().contains("Settings file not found"));
}

#[test]
fn explicit_file_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[history]\ncollection = \"from_file\"\n").unwrap();
    let s = load(Some(&path)).unwrap();
    // The process environment may set MOVIE_SEARCH_HISTORY_COLLECTION.
    if std::env::var(ENV_HISTORY_COLLECTION).is_err() {
        assert_eq!(s.history_collection, "from_file");
    }
}
