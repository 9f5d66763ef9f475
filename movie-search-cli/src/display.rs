//! Paged display of search results.

use std::io::{self, BufRead, Write};

use movie_search_core::paginate;
use movie_search_db::MovieRow;

use crate::console::Console;

pub(crate) const NO_RESULTS: &str = "No movies found. Try again.";
pub(crate) const SHOW_MORE_PROMPT: &str = "Show more? (y/n): ";

/// Render one result with its running number.
pub(crate) fn format_row(n: usize, row: &MovieRow) -> String {
    let year = row
        .release_year()
        .map(|y| y.to_string())
        .unwrap_or_else(|| "n/a".to_string());
    let description = row.description().unwrap_or("");
    match row.genre() {
        Some(genre) => format!(
            "{n}. {} ({year}), Genre: {genre}\nDescription: '{description}'",
            row.title()
        ),
        None => format!("{n}. {} ({year}),\nDescription: '{description}'", row.title()),
    }
}

/// Print rows page by page with numbering that continues across pages.
///
/// After a full page the user is asked whether to continue; only `y` (any
/// case) continues. A short page is the last one and ends without asking.
/// Returns how many rows were printed.
pub(crate) fn display_results<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    rows: &[MovieRow],
    page_size: usize,
) -> io::Result<usize> {
    let mut counter = 0;
    for page in paginate(rows, page_size) {
        for row in page {
            counter += 1;
            console.line(format_row(counter, row))?;
        }
        if page.len() < page_size {
            break;
        }
        match console.prompt(SHOW_MORE_PROMPT)? {
            Some(answer) if answer.to_lowercase() == "y" => {}
            _ => break,
        }
    }
    Ok(counter)
}

/// Report an empty result or display the rows. Returns whether anything was
/// found.
pub(crate) fn handle_results<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    rows: &[MovieRow],
    page_size: usize,
) -> io::Result<bool> {
    if rows.is_empty() {
        console.warn(NO_RESULTS)?;
        return Ok(false);
    }
    display_results(console, rows, page_size)?;
    Ok(true)
}

#[cfg(test)]
#[path = "tests/display_tests.rs"]
mod tests;
