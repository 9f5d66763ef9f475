use thiserror::Error;

/// Errors that end an interactive session or prevent it from starting.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Console I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Catalog connection or query failed
    #[error("Database error: {0}")]
    Database(String),

    /// Search history store failed
    #[error("History error: {0}")]
    History(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl CliError {
    pub(crate) fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub(crate) fn history(msg: impl Into<String>) -> Self {
        Self::History(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
