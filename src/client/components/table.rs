use dioxus::prelude::*;

use crate::listing::{Sort, SortDirection};

/// Clickable column header showing the active sort direction.
#[component]
pub fn SortHeader(
    label: &'static str,
    column: &'static str,
    sort: Option<Sort>,
    on_sort: EventHandler<&'static str>,
) -> Element {
    let arrow = match sort {
        Some(sort) if sort.column == column => match sort.direction {
            SortDirection::Ascending => " ▲",
            SortDirection::Descending => " ▼",
        },
        _ => "",
    };

    rsx!(
        th {
            class: "cursor-pointer select-none",
            onclick: move |_| on_sort.call(column),
            "{label}{arrow}"
        }
    )
}

/// Full-width row shown when the filtered list is empty.
#[component]
pub fn EmptyRow(columns: usize, message: &'static str) -> Element {
    rsx!(
        tr {
            td { colspan: "{columns}", class: "text-center opacity-70 py-8", "{message}" }
        }
    )
}
