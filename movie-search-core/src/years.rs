//! Year and year-range input validation.

use crate::error::YearError;

/// Earliest release year accepted in a search.
pub const MIN_YEAR: u16 = 1990;

/// Latest release year accepted in a search.
pub const MAX_YEAR: u16 = 2025;

/// A validated release-year predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearFilter {
    /// `release_year = year`
    Single(u16),
    /// `release_year BETWEEN start AND end`, both inclusive, `start <= end`
    Range { start: u16, end: u16 },
}

impl std::fmt::Display for YearFilter {
    /// Normalized form: `YYYY` or `YYYY-YYYY`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single(y) => write!(f, "{y}"),
            Self::Range { start, end } => write!(f, "{start}-{end}"),
        }
    }
}

/// An accepted year input together with the label written to search history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedYears {
    pub filter: YearFilter,
    /// `"<genre>, <years>"` when a genre is active, otherwise just `<years>`.
    pub label: String,
}

/// Validate a year (`YYYY`) or range (`YYYY-YYYY`) typed by the user.
///
/// Any input containing `-` is treated as a range and split on the first
/// `-`. Both halves must be non-empty ASCII digits. Everything else must be
/// exactly four digits after trimming. Accepted years lie in
/// `MIN_YEAR..=MAX_YEAR`.
pub fn validate_years(input: &str, genre: Option<&str>) -> Result<ValidatedYears, YearError> {
    let input = input.trim();
    let filter = if input.contains('-') {
        parse_range(input)?
    } else {
        parse_single(input)?
    };

    let label = match genre {
        Some(g) => format!("{g}, {filter}"),
        None => filter.to_string(),
    };
    Ok(ValidatedYears { filter, label })
}

fn parse_range(input: &str) -> Result<YearFilter, YearError> {
    let (start, end) = input
        .split_once('-')
        .ok_or(YearError::InvalidRangeFormat)?;
    if !is_digits(start) || !is_digits(end) {
        return Err(YearError::InvalidRangeFormat);
    }

    let start = bounded_year(start).ok_or(YearError::RangeOutOfBounds)?;
    let end = bounded_year(end).ok_or(YearError::RangeOutOfBounds)?;
    if start > end {
        return Err(YearError::RangeReversed);
    }
    Ok(YearFilter::Range { start, end })
}

fn parse_single(input: &str) -> Result<YearFilter, YearError> {
    if input.len() != 4 || !is_digits(input) {
        return Err(YearError::InvalidYearFormat);
    }
    bounded_year(input)
        .map(YearFilter::Single)
        .ok_or(YearError::YearOutOfBounds)
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parse an all-digit string, returning `None` when it falls outside the
/// accepted years. Overlong digit strings overflow into `None` as well.
fn bounded_year(digits: &str) -> Option<u16> {
    digits
        .parse::<u16>()
        .ok()
        .filter(|y| (MIN_YEAR..=MAX_YEAR).contains(y))
}

#[cfg(test)]
#[path = "tests/years_tests.rs"]
mod tests;
