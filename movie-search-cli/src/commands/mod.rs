pub(crate) mod history;
pub(crate) mod search;

/// How many entries the history views show.
pub(crate) const HISTORY_VIEW_SIZE: usize = 5;
