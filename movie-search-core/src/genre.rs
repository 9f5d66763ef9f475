use crate::error::GenreChoiceError;

/// Film categories offered by the genre menu.
///
/// The list is fixed for display and numbering only. At query time the
/// catalog's own `category` table is authoritative and names are compared
/// case-insensitively, so a genre here never has to match a row identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genre {
    Action,
    Animation,
    Children,
    Classics,
    Comedy,
    Documentary,
    Drama,
    Family,
    Foreign,
    Games,
    Horror,
    Music,
    SciFi,
    Sports,
    Travel,
    New,
}

/// All genres in menu order.
const ALL_GENRES: &[Genre] = &[
    Genre::Action,
    Genre::Animation,
    Genre::Children,
    Genre::Classics,
    Genre::Comedy,
    Genre::Documentary,
    Genre::Drama,
    Genre::Family,
    Genre::Foreign,
    Genre::Games,
    Genre::Horror,
    Genre::Music,
    Genre::SciFi,
    Genre::Sports,
    Genre::Travel,
    Genre::New,
];

impl Genre {
    /// Category name as stored in the catalog.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Action => "Action",
            Self::Animation => "Animation",
            Self::Children => "Children",
            Self::Classics => "Classics",
            Self::Comedy => "Comedy",
            Self::Documentary => "Documentary",
            Self::Drama => "Drama",
            Self::Family => "Family",
            Self::Foreign => "Foreign",
            Self::Games => "Games",
            Self::Horror => "Horror",
            Self::Music => "Music",
            Self::SciFi => "Sci-Fi",
            Self::Sports => "Sports",
            Self::Travel => "Travel",
            Self::New => "New",
        }
    }

    /// All 16 genres, in the order they are numbered on screen.
    pub fn all() -> &'static [Genre] {
        ALL_GENRES
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Resolve a 1-based numeric answer against a numbered list.
///
/// Surrounding whitespace is ignored. Anything that does not parse as an
/// integer is `NotANumber`; integers outside `1..=options.len()` are
/// `OutOfRange`.
pub fn choose_numbered<'a, T>(options: &'a [T], input: &str) -> Result<&'a T, GenreChoiceError> {
    let num: i64 = input
        .trim()
        .parse()
        .map_err(|_| GenreChoiceError::NotANumber)?;
    if num < 1 || num as u64 > options.len() as u64 {
        return Err(GenreChoiceError::OutOfRange {
            max: options.len(),
        });
    }
    Ok(&options[(num - 1) as usize])
}

#[cfg(test)]
#[path = "tests/genre_tests.rs"]
mod tests;
