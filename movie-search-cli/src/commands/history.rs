use std::io::{BufRead, Write};

use movie_search_history::DocumentStore;

use crate::CliError;
use crate::session::Session;

use super::HISTORY_VIEW_SIZE;

const EMPTY_HISTORY: &str = "No searches recorded yet.";

/// Print the most frequent search labels.
pub(crate) fn show_top_queries<S, R, W>(session: &mut Session<S, R, W>) -> Result<(), CliError>
where
    S: DocumentStore,
    R: BufRead,
    W: Write,
{
    let top = session
        .history
        .top_by_frequency(HISTORY_VIEW_SIZE)
        .map_err(|e| CliError::history(format!("Failed to read search history: {e}")))?;

    session.console.blank()?;
    session
        .console
        .heading("------ Top 5 Queries by Frequency ------")?;
    if top.is_empty() {
        session.console.line(EMPTY_HISTORY)?;
    }
    for item in top {
        session
            .console
            .line(format_args!("'{}' - {} times", item.query, item.count))?;
    }
    Ok(())
}

/// Print the newest searches, newest first.
pub(crate) fn show_recent_queries<S, R, W>(session: &mut Session<S, R, W>) -> Result<(), CliError>
where
    S: DocumentStore,
    R: BufRead,
    W: Write,
{
    let recent = session
        .history
        .most_recent(HISTORY_VIEW_SIZE)
        .map_err(|e| CliError::history(format!("Failed to read search history: {e}")))?;

    session.console.blank()?;
    session.console.heading("------ Last 5 Queries -------")?;
    if recent.is_empty() {
        session.console.line(EMPTY_HISTORY)?;
    }
    for item in recent {
        session
            .console
            .line(format_args!("{}: '{}'", item.datetime, item.query))?;
    }
    Ok(())
}
