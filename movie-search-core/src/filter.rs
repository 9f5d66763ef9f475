use crate::genre::Genre;
use crate::years::YearFilter;

/// One search invocation's active predicates.
///
/// Only these four combinations are supported; a title keyword is never
/// combined with a genre or year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchFilter {
    /// Substring match on the film title.
    Title(String),
    /// Films in a category, matched by name case-insensitively.
    Genre(Genre),
    /// Films released in a year or inclusive year range.
    Years(YearFilter),
    /// Category and release year together.
    GenreYears { genre: Genre, years: YearFilter },
}

impl SearchFilter {
    /// The genre predicate, if this filter has one.
    pub fn genre(&self) -> Option<Genre> {
        match self {
            Self::Genre(g) | Self::GenreYears { genre: g, .. } => Some(*g),
            _ => None,
        }
    }

    /// The year predicate, if this filter has one.
    pub fn years(&self) -> Option<YearFilter> {
        match self {
            Self::Years(y) | Self::GenreYears { years: y, .. } => Some(*y),
            _ => None,
        }
    }
}
