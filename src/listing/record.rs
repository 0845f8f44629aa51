use chrono::{DateTime, Utc};

/// Value a column sorts by.
///
/// Text keys are stored lowercased so that sorting is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    Number(i64),
    Text(String),
    Date(DateTime<Utc>),
}

impl SortKey {
    pub fn text(value: &str) -> Self {
        Self::Text(value.to_lowercase())
    }
}

/// A row that can be listed by a [`ListController`](super::ListController).
pub trait Record: Clone {
    fn id(&self) -> u64;

    /// Fields matched by the free-text `search` filter.
    fn search_fields(&self) -> Vec<&str>;

    /// Value of a categorical filter field, compared by exact match.
    ///
    /// Returns `None` for keys the record does not know, which never match.
    fn field(&self, key: &str) -> Option<String>;

    fn sort_key(&self, _column: &str) -> Option<SortKey> {
        None
    }

    /// Status bucket counted in the list stats.
    fn stats_bucket(&self) -> Option<&'static str> {
        None
    }
}
