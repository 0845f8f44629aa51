//! Tests for the collection mutations.

use super::{controller, item};

/// Tests that an upsert re-applies the filters.
///
/// Verifies that approving a pending record removes it from a pending-only view.
///
/// Expected: 6 pending records left
#[test]
fn upsert_reapplies_filters() {
    let mut controller = controller(25, 7, 10);
    controller.set_filter("status", "pending");
    controller.apply_filters();

    let mut approved = controller.find(3).cloned().unwrap();
    approved.status = "approved";
    controller.upsert(approved);

    assert_eq!(controller.render().stats.total, 6);
    assert_eq!(controller.items().len(), 25);
    assert_eq!(controller.find(3).map(|i| i.status), Some("approved"));
}

/// Tests inserting a new record at the front.
///
/// Expected: the new record is the first row
#[test]
fn insert_front_shows_the_record_first() {
    let mut controller = controller(3, 0, 10);

    controller.insert_front(item(99, "New offer", "approved"));

    assert_eq!(controller.render().body.rows()[0].id, 99);
}

/// Tests removing the only record of the last page.
///
/// Expected: the page is clamped back to the new last page
#[test]
fn remove_clamps_the_current_page() {
    let mut controller = controller(21, 0, 10);
    assert!(controller.go_to_page(3));

    let removed = controller.remove(21);

    assert_eq!(removed.map(|i| i.id), Some(21));
    assert_eq!(controller.page(), 2);
    assert_eq!(controller.render().body.rows().len(), 10);
    assert!(controller.remove(21).is_none());
}

/// Tests that a mutation keeps the page when it is still in range.
///
/// Expected: page 2 is kept
#[test]
fn mutations_keep_the_page_in_range() {
    let mut controller = controller(30, 0, 10);
    controller.go_to_page(2);

    controller.upsert(item(31, "Extra", "approved"));

    assert_eq!(controller.page(), 2);
    assert_eq!(controller.total_pages(), 4);
}
