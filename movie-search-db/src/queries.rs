//! Search query construction and execution.
//!
//! Every user-supplied value travels as a bound positional parameter; the
//! SQL text is assembled only from fixed fragments.

use movie_search_core::{SearchFilter, YearFilter};
use rusqlite::types::{ToSqlOutput, Value, ValueRef};
use rusqlite::{Connection, ToSql};

use crate::operations::OperationError;

// ── Query Specs ─────────────────────────────────────────────────────────────

/// Column layout of the rows a query returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowShape {
    /// `title, release_year, description`
    Film,
    /// `title, release_year, category name, description`
    Genre,
}

/// A value bound to a positional placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlParam {
    Text(String),
    Int(i64),
}

impl ToSql for SqlParam {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            Self::Text(s) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes()))),
            Self::Int(i) => Ok(ToSqlOutput::Owned(Value::Integer(*i))),
        }
    }
}

/// Log rendering only. Values are always bound, never spliced into SQL.
impl std::fmt::Display for SqlParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => write!(f, "'{s}'"),
            Self::Int(i) => write!(f, "{i}"),
        }
    }
}

/// SQL text plus its bound parameters, in placeholder order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpec {
    pub sql: String,
    pub params: Vec<SqlParam>,
    pub shape: RowShape,
}

const FILM_SELECT: &str = "SELECT f.title, f.release_year, f.description
         FROM film f";

const GENRE_SELECT: &str = "SELECT f.title, f.release_year, c.name, f.description
         FROM film f
         JOIN film_category fc ON fc.film_id = f.film_id
         JOIN category c ON fc.category_id = c.category_id";

/// Build the query for a filter combination.
///
/// Title keywords are wrapped as `%keyword%` and matched with `LIKE`, so
/// case sensitivity follows the engine's collation. Genres compare with
/// `LOWER(..) = LOWER(..)`. Year ranges use an inclusive `BETWEEN`.
pub fn build_query(filter: &SearchFilter) -> QuerySpec {
    let mut conditions: Vec<String> = Vec::new();
    let mut params: Vec<SqlParam> = Vec::new();

    let shape = match filter {
        SearchFilter::Title(_) | SearchFilter::Years(_) => RowShape::Film,
        SearchFilter::Genre(_) | SearchFilter::GenreYears { .. } => RowShape::Genre,
    };

    if let SearchFilter::Title(keyword) = filter {
        params.push(SqlParam::Text(format!("%{keyword}%")));
        conditions.push(format!("f.title LIKE ?{}", params.len()));
    }

    if let Some(genre) = filter.genre() {
        params.push(SqlParam::Text(genre.name().to_string()));
        conditions.push(format!("LOWER(c.name) = LOWER(?{})", params.len()));
    }

    match filter.years() {
        Some(YearFilter::Single(year)) => {
            params.push(SqlParam::Int(i64::from(year)));
            conditions.push(format!("f.release_year = ?{}", params.len()));
        }
        Some(YearFilter::Range { start, end }) => {
            params.push(SqlParam::Int(i64::from(start)));
            params.push(SqlParam::Int(i64::from(end)));
            conditions.push(format!(
                "f.release_year BETWEEN ?{} AND ?{}",
                params.len() - 1,
                params.len()
            ));
        }
        None => {}
    }

    let select = match shape {
        RowShape::Film => FILM_SELECT,
        RowShape::Genre => GENRE_SELECT,
    };
    let sql = format!(
        "{select}
         WHERE {}
         ORDER BY f.title",
        conditions.join(" AND ")
    );

    QuerySpec { sql, params, shape }
}

// ── Result Rows ─────────────────────────────────────────────────────────────

/// A row from a title or year search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilmRow {
    pub title: String,
    pub release_year: Option<u16>,
    pub description: Option<String>,
}

/// A row from a genre or genre+year search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreFilmRow {
    pub title: String,
    pub release_year: Option<u16>,
    pub genre: String,
    pub description: Option<String>,
}

/// A search result in whichever shape its query produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovieRow {
    Film(FilmRow),
    Genre(GenreFilmRow),
}

impl MovieRow {
    pub fn title(&self) -> &str {
        match self {
            Self::Film(r) => &r.title,
            Self::Genre(r) => &r.title,
        }
    }

    pub fn release_year(&self) -> Option<u16> {
        match self {
            Self::Film(r) => r.release_year,
            Self::Genre(r) => r.release_year,
        }
    }

    /// Category name, only present on genre-shaped rows.
    pub fn genre(&self) -> Option<&str> {
        match self {
            Self::Film(_) => None,
            Self::Genre(r) => Some(&r.genre),
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Film(r) => r.description.as_deref(),
            Self::Genre(r) => r.description.as_deref(),
        }
    }
}

// ── Execution ───────────────────────────────────────────────────────────────

/// Run a built query and fetch the complete result set.
///
/// An empty result is `Ok(vec![])`, not an error.
pub fn execute(conn: &Connection, spec: QuerySpec) -> Result<Vec<MovieRow>, OperationError> {
    log::debug!(
        "Executing {:?} query with {} param(s): [{}]",
        spec.shape,
        spec.params.len(),
        spec.params
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );

    let mut stmt = conn.prepare(&spec.sql)?;
    let params = rusqlite::params_from_iter(spec.params.iter());
    let rows = match spec.shape {
        RowShape::Film => stmt
            .query_map(params, |row| row_to_film(row).map(MovieRow::Film))?
            .collect::<Result<Vec<_>, _>>()?,
        RowShape::Genre => stmt
            .query_map(params, |row| row_to_genre_film(row).map(MovieRow::Genre))?
            .collect::<Result<Vec<_>, _>>()?,
    };

    log::debug!("Query returned {} row(s)", rows.len());
    Ok(rows)
}

/// Build and execute the query for `filter`.
pub fn search(conn: &Connection, filter: &SearchFilter) -> Result<Vec<MovieRow>, OperationError> {
    execute(conn, build_query(filter))
}

/// List every category name in the catalog, alphabetically.
pub fn list_categories(conn: &Connection) -> Result<Vec<String>, OperationError> {
    let mut stmt = conn.prepare("SELECT name FROM category ORDER BY name")?;
    let rows = stmt.query_map([], |row| row.get(0))?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Row Mapping Helpers ─────────────────────────────────────────────────────

fn row_to_film(row: &rusqlite::Row<'_>) -> rusqlite::Result<FilmRow> {
    Ok(FilmRow {
        title: row.get(0)?,
        release_year: year_column(row, 1)?,
        description: row.get(2)?,
    })
}

fn row_to_genre_film(row: &rusqlite::Row<'_>) -> rusqlite::Result<GenreFilmRow> {
    Ok(GenreFilmRow {
        title: row.get(0)?,
        release_year: year_column(row, 1)?,
        genre: row.get(2)?,
        description: row.get(3)?,
    })
}

/// Read a release year stored either as an integer or as text.
///
/// Sakila exports declare `release_year` as `YEAR` or `VARCHAR(4)`, so the
/// same column may arrive with integer or text storage class. A value that is
/// not a year (empty text, out of range) reads as `None`.
fn year_column(row: &rusqlite::Row<'_>, idx: usize) -> rusqlite::Result<Option<u16>> {
    let year = match row.get_ref(idx)? {
        ValueRef::Null => return Ok(None),
        ValueRef::Integer(i) => u16::try_from(i).ok(),
        ValueRef::Text(bytes) => std::str::from_utf8(bytes)
            .ok()
            .and_then(|s| s.trim().parse().ok()),
        _ => None,
    };
    if year.is_none() {
        log::warn!(
            "Ignoring unreadable release_year {:?} in column {idx}",
            row.get_ref(idx)?
        );
    }
    Ok(year)
}
