use std::collections::BTreeMap;

use crate::listing::record::Record;

/// Active filter criteria, keyed by field name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Filters {
    criteria: BTreeMap<String, String>,
}

impl Filters {
    /// Key of the free-text filter.
    pub const SEARCH: &'static str = "search";
    /// Value that disables a categorical filter.
    pub const ALL: &'static str = "all";

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.criteria.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.criteria.get(key).map(String::as_str)
    }

    /// Current value for a select box, `all` when unset.
    pub fn selected(&self, key: &str) -> &str {
        self.get(key).unwrap_or(Self::ALL)
    }

    pub fn clear(&mut self) {
        self.criteria.clear();
    }

    /// Whether `record` satisfies every active criterion.
    ///
    /// `search` is a case-insensitive substring match over the record's search fields. Any
    /// other key is an exact match on [`Record::field`]. Empty values and `all` match
    /// everything.
    pub fn matches<T: Record>(&self, record: &T) -> bool {
        self.criteria.iter().all(|(key, value)| {
            let value = value.trim();
            if value.is_empty() {
                return true;
            }

            if key == Self::SEARCH {
                let needle = value.to_lowercase();
                return record
                    .search_fields()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle));
            }

            value == Self::ALL || record.field(key).as_deref() == Some(value)
        })
    }
}
