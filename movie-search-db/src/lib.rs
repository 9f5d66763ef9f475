//! SQLite access to the film catalog.
//!
//! Opens an existing sakila-style catalog, builds parameterized search
//! queries from a [`SearchFilter`](movie_search_core::SearchFilter), and maps
//! result rows into typed records.

pub mod operations;
pub mod queries;
pub mod schema;

pub use operations::{OperationError, insert_category, insert_film, link_film_category};
pub use queries::{
    FilmRow, GenreFilmRow, MovieRow, QuerySpec, RowShape, SqlParam, build_query, execute,
    list_categories, search,
};
pub use schema::{REQUIRED_TABLES, SchemaError, open_catalog, open_memory};
