//! Core search types for the movie catalog.
//!
//! Input validation, filter construction, and pagination. Nothing in this
//! crate touches a database or the console.

pub mod error;
pub mod filter;
pub mod genre;
pub mod paginate;
pub mod years;

pub use error::{GenreChoiceError, YearError};
pub use filter::SearchFilter;
pub use genre::{Genre, choose_numbered};
pub use paginate::{DEFAULT_PAGE_SIZE, Pages, paginate};
pub use years::{MAX_YEAR, MIN_YEAR, ValidatedYears, YearFilter, validate_years};
