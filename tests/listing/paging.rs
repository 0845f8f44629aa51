use internhub::{
    listing::{ListController, PageLink},
    model::offer::Offer,
};

use super::*;

/// Tests filtering 25 offers down to the 7 pending ones.
///
/// Expected: a single page holding all 7, with stats counting only the filtered rows
#[test]
fn pending_filter_fits_on_one_page() {
    let mut list = ListController::<Offer>::new(10);
    list.replace_all(factory::offers(25, 7));

    list.set_filter("status", "pending");
    list.apply_filters();
    let view = list.render();

    assert_eq!(list.total_pages(), 1);
    assert_eq!(view.body.rows().len(), 7);
    assert_eq!(view.stats.total, 7);
    assert_eq!(view.stats.count("pending"), 7);
    assert!(!view.pagination.has_next);
}

/// Tests the last page size and out-of-range navigation.
///
/// Expected: 3 pages, the last holding 5 rows, invalid pages ignored
#[test]
fn last_page_holds_the_remainder() {
    let mut list = ListController::<Offer>::new(10);
    list.replace_all(factory::offers(25, 0));

    assert_eq!(list.total_pages(), 3);
    assert!(list.go_to_page(3));
    assert_eq!(list.render().body.rows().len(), 5);

    let before = list.render();
    assert!(!list.go_to_page(0));
    assert!(!list.go_to_page(4));
    assert_eq!(list.render(), before);
}

/// Tests that removing the only row of the last page steps back a page.
///
/// Expected: page 2 after the removal
#[test]
fn removal_clamps_the_page() {
    let mut list = ListController::<Offer>::new(10);
    list.replace_all(factory::offers(21, 0));
    list.go_to_page(3);

    list.remove(21);

    assert_eq!(list.page(), 2);
    assert_eq!(
        list.render().pagination.links,
        vec![PageLink::Page(1), PageLink::Page(2)]
    );
}
