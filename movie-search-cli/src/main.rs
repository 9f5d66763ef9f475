//! movie-search CLI
//!
//! Interactive search over a film catalog, with every search recorded in a
//! history collection.

mod cli_types;
mod commands;
mod console;
mod display;
mod error;
mod session;
mod settings;

use std::io::Write;

use clap::Parser;
use movie_search_core::Genre;
use movie_search_history::{SearchHistory, SqliteStore};
use rusqlite::Connection;

use crate::cli_types::Cli;
use crate::console::Console;
pub(crate) use crate::error::CliError;
use crate::session::Session;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    if let Err(e) = run(&cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

/// Initialize `env_logger`. `RUST_LOG` takes precedence over the flags.
fn init_logging(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level));
    if verbose {
        builder.format_timestamp_millis();
    } else {
        builder.format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()));
    }
    builder.init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let settings = settings::load(cli.config.as_deref())?;
    log::debug!("Resolved settings: {:?}", settings);

    let conn = movie_search_db::open_catalog(&settings.catalog_db)
        .map_err(|e| CliError::database(format!("Failed to open catalog database: {e}")))?;
    warn_missing_genres(&conn);

    let store = SqliteStore::open(&settings.history_db, &settings.history_collection)
        .map_err(|e| CliError::history(format!("Failed to open search history: {e}")))?;
    log::info!(
        "Connected to search history '{}' at {}",
        settings.history_collection,
        settings.history_db.display()
    );

    let stdin = std::io::stdin();
    let console = Console::new(stdin.lock(), std::io::stdout());
    let mut session = Session::new(conn, SearchHistory::new(store), console, settings.page_size);

    let result = session.run();
    session.close();
    result
}

/// Log menu genres the catalog has no category for. Searches for them will
/// simply come back empty.
fn warn_missing_genres(conn: &Connection) {
    let categories = match movie_search_db::list_categories(conn) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Could not list catalog categories: {e}");
            return;
        }
    };
    for genre in Genre::all() {
        if !categories
            .iter()
            .any(|c| c.eq_ignore_ascii_case(genre.name()))
        {
            log::warn!("Catalog has no category named '{}'", genre.name());
        }
    }
}
