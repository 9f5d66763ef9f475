//! Connection and display settings.
//!
//! Each value is resolved through a priority chain:
//!
//! 1. Environment variable
//! 2. `settings.toml` (default `~/.config/movie-search/settings.toml`)
//! 3. Built-in default

use std::path::{Path, PathBuf};

use movie_search_core::DEFAULT_PAGE_SIZE;
use serde::Deserialize;

use crate::CliError;

pub(crate) const ENV_CATALOG_DB: &str = "MOVIE_SEARCH_CATALOG_DB";
pub(crate) const ENV_HISTORY_DB: &str = "MOVIE_SEARCH_HISTORY_DB";
pub(crate) const ENV_HISTORY_COLLECTION: &str = "MOVIE_SEARCH_HISTORY_COLLECTION";
pub(crate) const ENV_PAGE_SIZE: &str = "MOVIE_SEARCH_PAGE_SIZE";

const DEFAULT_COLLECTION: &str = "search_history";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    /// SQLite catalog with `film`, `category` and `film_category` tables
    pub catalog_db: PathBuf,
    /// SQLite file holding the search-history collection
    pub history_db: PathBuf,
    pub history_collection: String,
    pub page_size: usize,
}

/// TOML settings file format.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct SettingsFile {
    catalog: Option<CatalogSection>,
    history: Option<HistorySection>,
    display: Option<DisplaySection>,
}

#[derive(Debug, Deserialize)]
struct CatalogSection {
    path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct HistorySection {
    path: Option<PathBuf>,
    collection: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DisplaySection {
    page_size: Option<usize>,
}

/// Canonical path to the settings file: `~/.config/movie-search/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("movie-search").join("settings.toml")
}

fn default_history_db() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data.join("movie-search").join("history.db")
}

/// Load settings from the process environment and the settings file.
///
/// The default settings file may be absent; an explicitly requested one
/// must exist.
pub(crate) fn load(config_override: Option<&Path>) -> Result<Settings, CliError> {
    let file = match config_override {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::config(format!(
                    "Settings file not found: {}",
                    path.display()
                )));
            }
            read_settings_file(path)?
        }
        None => {
            let path = settings_path();
            if path.exists() {
                read_settings_file(&path)?
            } else {
                log::debug!("No settings file at {}, using defaults", path.display());
                SettingsFile::default()
            }
        }
    };
    resolve(|key| std::env::var(key).ok(), file)
}

/// Parse a settings file.
pub(crate) fn read_settings_file(path: &Path) -> Result<SettingsFile, CliError> {
    let contents = std::fs::read_to_string(path)?;
    parse_settings(&contents)
        .map_err(|e| CliError::config(format!("Failed to parse {}: {}", path.display(), e)))
}

pub(crate) fn parse_settings(contents: &str) -> Result<SettingsFile, toml::de::Error> {
    toml::from_str(contents)
}

/// Combine environment lookups and file values into final settings.
pub(crate) fn resolve(
    env: impl Fn(&str) -> Option<String>,
    file: SettingsFile,
) -> Result<Settings, CliError> {
    let catalog = file.catalog.unwrap_or(CatalogSection { path: None });
    let history = file.history.unwrap_or(HistorySection {
        path: None,
        collection: None,
    });
    let display = file.display.unwrap_or(DisplaySection { page_size: None });

    let catalog_db = env(ENV_CATALOG_DB)
        .map(PathBuf::from)
        .or(catalog.path)
        .unwrap_or_else(|| PathBuf::from("sakila.db"));

    let history_db = env(ENV_HISTORY_DB)
        .map(PathBuf::from)
        .or(history.path)
        .unwrap_or_else(default_history_db);

    let history_collection = env(ENV_HISTORY_COLLECTION)
        .or(history.collection)
        .unwrap_or_else(|| DEFAULT_COLLECTION.to_string());

    let page_size = match env(ENV_PAGE_SIZE) {
        Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
            CliError::config(format!("{ENV_PAGE_SIZE} must be a positive integer, got '{raw}'"))
        })?,
        None => display.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
    };
    if page_size == 0 {
        return Err(CliError::config("page size must be at least 1"));
    }

    Ok(Settings {
        catalog_db,
        history_db,
        history_collection,
        page_size,
    })
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
