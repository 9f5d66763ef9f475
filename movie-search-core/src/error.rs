use thiserror::Error;

/// Reasons a year or year-range input is rejected.
///
/// The display strings are shown to the user verbatim before re-prompting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum YearError {
    /// A range input that is not two numeric parts around a `-`
    #[error("Invalid format! Use YYYY-YYYY.")]
    InvalidRangeFormat,

    /// A range bound outside the supported years
    #[error("Years must be between 1990 and 2025!")]
    RangeOutOfBounds,

    /// A range whose start comes after its end
    #[error("Start year must be less than or equal to end year!")]
    RangeReversed,

    /// A single-year input that is not four digits
    #[error("Invalid format! Enter a 4-digit year (YYYY).")]
    InvalidYearFormat,

    /// A single year outside the supported years
    #[error("Year must be between 1990 and 2025!")]
    YearOutOfBounds,
}

/// Reasons a numbered menu choice is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenreChoiceError {
    #[error("Invalid input! Enter a number.")]
    NotANumber,

    #[error("Enter a number between 1 and {max}.")]
    OutOfRange { max: usize },
}
