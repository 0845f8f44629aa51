use dioxus::prelude::*;

use crate::listing::{PageLink, Pagination};

/// Previous, numbered and next buttons. Hidden when everything fits on one page.
#[component]
pub fn PaginationBar(pagination: Pagination, on_page: EventHandler<usize>) -> Element {
    if pagination.total_pages <= 1 {
        return rsx!();
    }

    let current = pagination.current;

    rsx!(
        div { class: "join justify-center",
            button {
                class: "join-item btn btn-sm",
                disabled: !pagination.has_previous,
                onclick: move |_| on_page.call(current - 1),
                "«"
            }
            for (index, link) in pagination.links.iter().copied().enumerate() {
                {match link {
                    PageLink::Page(page) => rsx!(
                        button {
                            key: "{index}",
                            class: if page == current { "join-item btn btn-sm btn-active" } else { "join-item btn btn-sm" },
                            onclick: move |_| on_page.call(page),
                            "{page}"
                        }
                    ),
                    PageLink::Gap => rsx!(
                        button { key: "{index}", class: "join-item btn btn-sm btn-disabled", "…" }
                    ),
                }}
            }
            button {
                class: "join-item btn btn-sm",
                disabled: !pagination.has_next,
                onclick: move |_| on_page.call(current + 1),
                "»"
            }
        }
    )
}
