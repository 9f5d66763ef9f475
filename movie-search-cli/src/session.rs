//! The interactive menu loop.

use std::io::{BufRead, Write};

use movie_search_history::{DocumentStore, SearchHistory};
use rusqlite::Connection;

use crate::CliError;
use crate::commands;
use crate::console::Console;

const RULE_WIDTH: usize = 50;

/// A numbered entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuChoice {
    Title,
    Genre,
    Year,
    GenreYear,
    TopQueries,
    RecentQueries,
    Exit,
}

impl MenuChoice {
    pub(crate) fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Title),
            "2" => Some(Self::Genre),
            "3" => Some(Self::Year),
            "4" => Some(Self::GenreYear),
            "5" => Some(Self::TopQueries),
            "6" => Some(Self::RecentQueries),
            "7" => Some(Self::Exit),
            _ => None,
        }
    }
}

const MENU: &str = "Enter 1 - if you want to find the movie by title or keyword.
Enter 2 - if you want to find the movie by genre.
Enter 3 - if you want to find the movie by year or range of years.
Enter 4 - if you want to find the movie by genre and year or range of years.
Enter 5 - show top 5 popular queries.
Enter 6 - show last 5 queries.
Enter 7 - if you want to EXIT.";

/// One interactive session: the catalog connection, the search history and
/// the console, all held until the user exits.
pub(crate) struct Session<S, R, W> {
    pub(crate) conn: Connection,
    pub(crate) history: SearchHistory<S>,
    pub(crate) console: Console<R, W>,
    pub(crate) page_size: usize,
}

impl<S, R, W> Session<S, R, W>
where
    S: DocumentStore,
    R: BufRead,
    W: Write,
{
    pub(crate) fn new(
        conn: Connection,
        history: SearchHistory<S>,
        console: Console<R, W>,
        page_size: usize,
    ) -> Self {
        Self {
            conn,
            history,
            console,
            page_size,
        }
    }

    /// Run the menu until the user exits or input ends.
    pub(crate) fn run(&mut self) -> Result<(), CliError> {
        let rule = "=".repeat(RULE_WIDTH);
        self.console.line(&rule)?;
        self.console.heading("Welcome to our new Movie Search App!")?;
        self.console.line(&rule)?;

        loop {
            self.console.blank()?;
            self.console.heading("Which movie do you want to search?")?;
            self.console.line("-".repeat(RULE_WIDTH))?;
            self.console.line(MENU)?;
            self.console.line("-".repeat(RULE_WIDTH))?;

            let Some(answer) = self.console.prompt("Your Choice: ")? else {
                log::debug!("Input closed at main menu");
                break;
            };
            let Some(choice) = MenuChoice::parse(&answer) else {
                self.console.warn("Invalid choice. Try again.")?;
                continue;
            };
            log::debug!("Menu choice: {:?}", choice);

            match choice {
                MenuChoice::Title => commands::search::search_by_title(self)?,
                MenuChoice::Genre => commands::search::search_by_genre(self)?,
                MenuChoice::Year => commands::search::search_by_year(self, None)?,
                MenuChoice::GenreYear => commands::search::search_by_genre_and_year(self)?,
                MenuChoice::TopQueries => commands::history::show_top_queries(self)?,
                MenuChoice::RecentQueries => commands::history::show_recent_queries(self)?,
                MenuChoice::Exit => break,
            }
        }

        self.console.line("Goodbye!  See you later!")?;
        Ok(())
    }

    /// Close the catalog connection and hand back the history and console.
    pub(crate) fn close(self) -> (SearchHistory<S>, Console<R, W>) {
        if let Err((_, e)) = self.conn.close() {
            log::warn!("Failed to close catalog connection cleanly: {e}");
        }
        (self.history, self.console)
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
