/// Pages on each side of the current page that always get their own link.
const WINDOW: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(usize),
    /// One or more skipped pages, rendered as `...`.
    Gap,
}

/// Builds the pagination bar for `current` out of `total` pages.
///
/// The first and last pages are always present, together with a window of two pages around
/// the current one. Skipped runs collapse into a single [`PageLink::Gap`].
pub fn page_links(current: usize, total: usize) -> Vec<PageLink> {
    let mut links = Vec::new();

    for page in 1..=total {
        let near_current = page + WINDOW >= current && page <= current + WINDOW;

        if page == 1 || page == total || near_current {
            links.push(PageLink::Page(page));
        } else if links.last() != Some(&PageLink::Gap) {
            links.push(PageLink::Gap);
        }
    }

    links
}
