use std::collections::BTreeMap;

use crate::listing::pagination::PageLink;

/// Snapshot produced by [`ListController::render`](super::ListController::render).
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<T> {
    pub body: ListBody<T>,
    pub pagination: Pagination,
    pub stats: Stats,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListBody<T> {
    /// No record matches the active filters.
    Empty,
    /// Records of the current page, in display order.
    Rows(Vec<T>),
}

impl<T> ListBody<T> {
    pub fn rows(&self) -> &[T] {
        match self {
            Self::Empty => &[],
            Self::Rows(rows) => rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub current: usize,
    pub total_pages: usize,
    pub links: Vec<PageLink>,
    pub has_previous: bool,
    pub has_next: bool,
}

/// Counts over the filtered collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub by_bucket: BTreeMap<&'static str, usize>,
}

impl Stats {
    pub fn count(&self, bucket: &str) -> usize {
        self.by_bucket.get(bucket).copied().unwrap_or(0)
    }
}
