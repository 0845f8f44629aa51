//! Filtered, sorted and paged views over an in-memory collection.
//!
//! One [`ListController`] backs each entity list (users, offers, company offers, applicants).
//! The controller owns the collection, the active filters, the sort and the current page.
//! Views call [`ListController::render`] to get a [`ListView`] snapshot and never slice the
//! collection themselves.

pub mod filter;
pub mod pagination;
pub mod record;
pub mod view;

#[cfg(test)]
mod tests;

pub use self::{
    filter::Filters,
    pagination::{page_links, PageLink},
    record::{Record, SortKey},
    view::{ListBody, ListView, Pagination, Stats},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub column: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListController<T: Record> {
    items: Vec<T>,
    /// Indices into `items` that pass the filters, in display order.
    filtered: Vec<usize>,
    filters: Filters,
    sort: Option<Sort>,
    page: usize,
    page_size: usize,
}

impl<T: Record> ListController<T> {
    /// Creates an empty controller showing `page_size` rows per page.
    ///
    /// A page size of zero is treated as one.
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            filtered: Vec::new(),
            filters: Filters::default(),
            sort: None,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Stores one filter criterion. Takes effect on the next [`Self::apply_filters`].
    pub fn set_filter(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.filters.set(key, value);
    }

    /// Recomputes the filtered collection and goes back to the first page.
    pub fn apply_filters(&mut self) {
        self.refilter();
        self.page = 1;
    }

    /// Moves to page `n`.
    ///
    /// Returns `false` and leaves the state untouched when `n` is outside
    /// `1..=total_pages`.
    pub fn go_to_page(&mut self, n: usize) -> bool {
        if n < 1 || n > self.total_pages() {
            return false;
        }

        self.page = n;
        true
    }

    /// Sorts the filtered collection by `column`.
    ///
    /// The first call on a column sorts ascending and a repeated call toggles the direction.
    /// The current page is kept.
    pub fn sort_by(&mut self, column: &str) {
        let direction = match &self.sort {
            Some(sort) if sort.column == column && sort.direction == SortDirection::Ascending => {
                SortDirection::Descending
            }
            _ => SortDirection::Ascending,
        };

        self.sort = Some(Sort {
            column: column.to_string(),
            direction,
        });
        self.apply_sort();
    }

    /// Builds the snapshot for the current page.
    pub fn render(&self) -> ListView<T> {
        let total_pages = self.total_pages();

        let body = if self.filtered.is_empty() {
            ListBody::Empty
        } else {
            let start = (self.page - 1) * self.page_size;
            let rows = self
                .filtered
                .iter()
                .skip(start)
                .take(self.page_size)
                .map(|&index| self.items[index].clone())
                .collect();

            ListBody::Rows(rows)
        };

        let mut stats = Stats {
            total: self.filtered.len(),
            ..Stats::default()
        };
        for &index in &self.filtered {
            if let Some(bucket) = self.items[index].stats_bucket() {
                *stats.by_bucket.entry(bucket).or_insert(0) += 1;
            }
        }

        ListView {
            body,
            pagination: Pagination {
                current: self.page,
                total_pages,
                links: page_links(self.page, total_pages),
                has_previous: self.page > 1,
                has_next: self.page < total_pages,
            },
            stats,
        }
    }

    /// Replaces the whole collection, keeping filters and sort.
    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
        self.refresh();
    }

    /// Replaces the record with the same id, or appends it.
    pub fn upsert(&mut self, item: T) {
        match self.items.iter().position(|existing| existing.id() == item.id()) {
            Some(index) => self.items[index] = item,
            None => self.items.push(item),
        }
        self.refresh();
    }

    pub fn insert_front(&mut self, item: T) {
        self.items.insert(0, item);
        self.refresh();
    }

    pub fn remove(&mut self, id: u64) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        let removed = self.items.remove(index);
        self.refresh();

        Some(removed)
    }

    pub fn find(&self, id: u64) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Every record passing the filters, in display order, across all pages.
    pub fn filtered(&self) -> Vec<&T> {
        self.filtered.iter().map(|&index| &self.items[index]).collect()
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn sort(&self) -> Option<&Sort> {
        self.sort.as_ref()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        self.filtered.len().div_ceil(self.page_size)
    }

    /// Re-applies filters and sort after a mutation, clamping the page into range.
    fn refresh(&mut self) {
        self.refilter();
        self.page = self.page.clamp(1, self.total_pages().max(1));
    }

    fn refilter(&mut self) {
        self.filtered = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| self.filters.matches(*item))
            .map(|(index, _)| index)
            .collect();

        self.apply_sort();
    }

    fn apply_sort(&mut self) {
        let Some(sort) = &self.sort else {
            return;
        };

        let items = &self.items;
        // `sort_by` is stable, so equal keys keep their insertion order
        self.filtered.sort_by(|&a, &b| {
            let ordering = items[a]
                .sort_key(&sort.column)
                .cmp(&items[b].sort_key(&sort.column));

            match sort.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }
}

impl<T: Record> Default for ListController<T> {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_PAGE_SIZE)
    }
}
