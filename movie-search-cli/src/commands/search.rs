use std::io::{BufRead, Write};

use movie_search_core::{Genre, SearchFilter, validate_years};
use movie_search_db::MovieRow;
use movie_search_history::DocumentStore;

use crate::CliError;
use crate::console::select_genre;
use crate::display::handle_results;
use crate::session::Session;

const TITLE_PROMPT: &str = "Enter movie title or keyword: ";
const YEAR_PROMPT: &str = "Enter a year or range (e.g. 2006-2008) from 1990 to 2025: ";

/// Search by a title keyword. An empty result returns to the menu.
pub(crate) fn search_by_title<S, R, W>(session: &mut Session<S, R, W>) -> Result<(), CliError>
where
    S: DocumentStore,
    R: BufRead,
    W: Write,
{
    let Some(input) = session.console.prompt(TITLE_PROMPT)? else {
        return Ok(());
    };
    let keyword = input.trim().to_string();
    log_search(session, &keyword)?;

    let rows = run_search(session, &SearchFilter::Title(keyword))?;
    handle_results(&mut session.console, &rows, session.page_size)?;
    Ok(())
}

/// Search by a genre picked from the numbered list. An empty result returns
/// to the menu.
pub(crate) fn search_by_genre<S, R, W>(session: &mut Session<S, R, W>) -> Result<(), CliError>
where
    S: DocumentStore,
    R: BufRead,
    W: Write,
{
    let Some(genre) = select_genre(&mut session.console, Genre::all())? else {
        return Ok(());
    };
    log_search(session, genre.name())?;

    let rows = run_search(session, &SearchFilter::Genre(genre))?;
    handle_results(&mut session.console, &rows, session.page_size)?;
    Ok(())
}

/// Pick a genre, then run the year loop restricted to it.
pub(crate) fn search_by_genre_and_year<S, R, W>(
    session: &mut Session<S, R, W>,
) -> Result<(), CliError>
where
    S: DocumentStore,
    R: BufRead,
    W: Write,
{
    let Some(genre) = select_genre(&mut session.console, Genre::all())? else {
        return Ok(());
    };
    search_by_year(session, Some(genre))
}

/// Search by year or year range, optionally within a genre.
///
/// Rejected input and empty results both re-prompt; the loop ends once
/// something is found or input runs out. Every accepted input is logged,
/// found or not.
pub(crate) fn search_by_year<S, R, W>(
    session: &mut Session<S, R, W>,
    genre: Option<Genre>,
) -> Result<(), CliError>
where
    S: DocumentStore,
    R: BufRead,
    W: Write,
{
    loop {
        let Some(input) = session.console.prompt(YEAR_PROMPT)? else {
            return Ok(());
        };
        let validated = match validate_years(&input, genre.map(|g| g.name())) {
            Ok(v) => v,
            Err(e) => {
                session.console.warn(e)?;
                continue;
            }
        };
        log_search(session, &validated.label)?;

        let filter = match genre {
            Some(genre) => SearchFilter::GenreYears {
                genre,
                years: validated.filter,
            },
            None => SearchFilter::Years(validated.filter),
        };
        let rows = run_search(session, &filter)?;
        if handle_results(&mut session.console, &rows, session.page_size)? {
            return Ok(());
        }
    }
}

fn log_search<S: DocumentStore, R, W>(
    session: &mut Session<S, R, W>,
    label: &str,
) -> Result<(), CliError> {
    session
        .history
        .log_search(label)
        .map_err(|e| CliError::history(format!("Failed to save search '{label}': {e}")))?;
    Ok(())
}

fn run_search<S, R, W>(
    session: &Session<S, R, W>,
    filter: &SearchFilter,
) -> Result<Vec<MovieRow>, CliError> {
    movie_search_db::search(&session.conn, filter)
        .map_err(|e| CliError::database(format!("Search failed: {e}")))
}
