//! Event glue between view inputs and a [`ListController`] held in a signal.

use dioxus::prelude::*;

use crate::listing::{ListController, Record};

/// Stores one criterion and re-applies the filters, returning to page 1.
pub fn filter_list<T: Record + 'static>(
    mut list: Signal<ListController<T>>,
    key: &str,
    value: String,
) {
    let mut list = list.write();
    list.set_filter(key, value);
    list.apply_filters();
}

pub fn sort_list<T: Record + 'static>(mut list: Signal<ListController<T>>, column: &str) {
    list.write().sort_by(column);
}

pub fn page_list<T: Record + 'static>(mut list: Signal<ListController<T>>, page: usize) {
    list.write().go_to_page(page);
}
