//! Line-based console I/O and the numbered-choice prompt.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use movie_search_core::choose_numbered;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

/// A line-oriented console over any reader/writer pair.
///
/// End of input is reported as `None` from [`Console::prompt`], which callers
/// treat as "abandon this prompt".
pub(crate) struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `text` without a newline and read one line of input.
    ///
    /// The trailing line ending is stripped; other whitespace is kept.
    pub(crate) fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']);
        Ok(Some(trimmed.to_string()))
    }

    pub(crate) fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    pub(crate) fn blank(&mut self) -> io::Result<()> {
        writeln!(self.output)
    }

    /// Print a bold heading.
    pub(crate) fn heading(&mut self, text: &str) -> io::Result<()> {
        writeln!(
            self.output,
            "{}",
            text.if_supports_color(Stdout, |t| t.bold())
        )
    }

    /// Print a recoverable problem, such as a rejected input.
    pub(crate) fn warn(&mut self, text: impl Display) -> io::Result<()> {
        let text = text.to_string();
        writeln!(
            self.output,
            "{}",
            text.if_supports_color(Stdout, |t| t.yellow())
        )
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.output
    }
}

/// Show `options` numbered from 1 and keep asking until a valid number is
/// entered.
///
/// Returns `None` only when input ends.
pub(crate) fn select_genre<T, R, W>(
    console: &mut Console<R, W>,
    options: &[T],
) -> io::Result<Option<T>>
where
    T: Display + Clone,
    R: BufRead,
    W: Write,
{
    console.line("Available genres:")?;
    for (i, option) in options.iter().enumerate() {
        console.line(format_args!("{}. {}", i + 1, option))?;
    }

    loop {
        let Some(answer) = console.prompt("Enter the number of your genre: ")? else {
            return Ok(None);
        };
        match choose_numbered(options, &answer) {
            Ok(choice) => return Ok(Some(choice.clone())),
            Err(e) => console.warn(e)?,
        }
    }
}

#[cfg(test)]
#[path = "tests/console_tests.rs"]
mod tests;
