//! Tests for ListController::go_to_page.

use super::controller;

/// Tests page count and last-page size.
///
/// Verifies `ceil(N / P)` pages, with `N mod P` rows on the last page, or `P` when the
/// collection divides evenly.
///
/// Expected: page counts and last-page sizes for several collection sizes
#[test]
fn last_page_holds_the_remainder() {
    let cases = [(25, 10, 3, 5), (30, 10, 3, 10), (1, 10, 1, 1), (7, 3, 3, 1)];

    for (count, page_size, pages, last) in cases {
        let mut controller = controller(count, 0, page_size);

        assert_eq!(controller.total_pages(), pages, "{} / {}", count, page_size);
        assert!(controller.go_to_page(pages));
        assert_eq!(controller.render().body.rows().len(), last);
    }
}

/// Tests that only the requested slice is rendered.
///
/// Expected: page 2 of size 10 shows ids 11 through 20
#[test]
fn renders_the_requested_slice() {
    let mut controller = controller(25, 0, 10);

    assert!(controller.go_to_page(2));

    let ids: Vec<u64> = controller.render().body.rows().iter().map(|i| i.id).collect();
    assert_eq!(ids, (11..=20).collect::<Vec<u64>>());
}

/// Tests out-of-range pages.
///
/// Expected: page 0 and pages past the end leave page and output unchanged
#[test]
fn out_of_range_pages_are_ignored() {
    let mut controller = controller(25, 0, 10);
    assert!(controller.go_to_page(2));
    let before = controller.render();

    assert!(!controller.go_to_page(0));
    assert!(!controller.go_to_page(4));

    assert_eq!(controller.page(), 2);
    assert_eq!(controller.render(), before);
}

/// Tests an empty collection.
///
/// Expected: no page is reachable, and the current page stays 1
#[test]
fn empty_collection_has_no_pages() {
    let mut controller = controller(0, 0, 10);

    assert_eq!(controller.total_pages(), 0);
    assert!(!controller.go_to_page(1));
    assert_eq!(controller.page(), 1);
}
