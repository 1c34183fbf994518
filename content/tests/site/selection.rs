use content::{Lightbox, Selection};

#[test]
fn select_twice_clears() {
    let mut selection = Selection::new();
    assert!(selection.is_none());

    selection.select(3);
    assert_eq!(selection.current(), Some(&3));

    selection.select(3);
    assert!(selection.is_none());
}

#[test]
fn selecting_another_key_replaces() {
    let mut selection = Selection::new();
    selection.select("bangkok");
    selection.select("paris");
    assert!(selection.is_selected(&"paris"));
    assert!(!selection.is_selected(&"bangkok"));
}

#[test]
fn clear_and_initially_open() {
    let mut selection = Selection::open(0);
    assert!(selection.is_selected(&0));
    selection.clear();
    assert!(selection.is_none());
    selection.clear();
    assert!(selection.is_none());
}

#[test]
fn out_of_range_index_is_ignored() {
    let mut selection = Selection::open(1);
    selection.select_within(8, 8);
    assert_eq!(selection.current(), Some(&1));
    selection.select_within(7, 8);
    assert_eq!(selection.current(), Some(&7));
}

#[test]
fn lightbox_wraps_forward_and_backward() {
    let mut lightbox = Lightbox::new(9);
    lightbox.open(8);
    lightbox.next();
    assert_eq!(lightbox.current(), Some(0));

    lightbox.previous();
    assert_eq!(lightbox.current(), Some(8));

    lightbox.open(0);
    lightbox.previous();
    assert_eq!(lightbox.current(), Some(8));
}

#[test]
fn lightbox_steps_within_range() {
    let mut lightbox = Lightbox::new(3);
    lightbox.open(0);
    lightbox.next();
    lightbox.next();
    assert_eq!(lightbox.current(), Some(2));
    lightbox.previous();
    assert_eq!(lightbox.current(), Some(1));
}

#[test]
fn lightbox_navigation_needs_an_open_item() {
    let mut lightbox = Lightbox::new(4);
    lightbox.next();
    lightbox.previous();
    assert_eq!(lightbox.current(), None);

    lightbox.open(4);
    assert_eq!(lightbox.current(), None);

    let mut empty = Lightbox::new(0);
    empty.open(0);
    empty.next();
    assert!(empty.is_empty());
    assert_eq!(empty.current(), None);
}

#[test]
fn lightbox_close() {
    let mut lightbox = Lightbox::new(2);
    lightbox.open(1);
    lightbox.close();
    assert_eq!(lightbox.current(), None);
    assert_eq!(lightbox.len(), 2);
}

#[test]
fn single_item_lightbox_stays_put() {
    let mut lightbox = Lightbox::new(1);
    lightbox.open(0);
    lightbox.next();
    assert_eq!(lightbox.current(), Some(0));
    lightbox.previous();
    assert_eq!(lightbox.current(), Some(0));
}
