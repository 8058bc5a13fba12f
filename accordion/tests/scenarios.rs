//! End-to-end accordion scenarios against the test host
//!
//! Fixture: padding 4, header min size 100x20, detail min size 200x60.

use std::cell::RefCell;
use std::rc::Rc;

use accordion::prelude::*;
use accordion::testing::{tap, TestHost, TestPane};

fn item(title: &str) -> AccordionItem {
    AccordionItem::new(title, TestPane::shared(Size::new(200, 60)))
}

fn accordion(count: usize) -> AccordionContainer<TestHost> {
    AccordionContainer::new(
        TestHost::new(),
        (0..count).map(|i| item(&format!("Section {i}"))),
    )
}

fn open_flags(accordion: &AccordionContainer<TestHost>) -> Vec<bool> {
    accordion.items().iter().map(AccordionItem::is_open).collect()
}

#[test]
fn empty_container() {
    let accordion = accordion(0);

    assert_eq!(accordion.min_size(), Size::new(0, 0));
    assert!(accordion.renderer().borrow().objects().is_empty());
}

#[test]
fn single_closed_item() {
    let accordion = accordion(1);
    assert_eq!(accordion.min_size(), Size::new(100, 20));

    accordion.open(0);
    assert_eq!(accordion.min_size(), Size::new(200, 84));
}

#[test]
fn two_items_single_open_toggle_second() {
    let accordion = accordion(2);
    assert_eq!(accordion.min_size(), Size::new(100, 44));

    accordion.open(1);
    assert_eq!(open_flags(&accordion), vec![false, true]);
    assert_eq!(accordion.min_size(), Size::new(200, 108));

    accordion.open(0);
    assert_eq!(open_flags(&accordion), vec![true, false]);
}

#[test]
fn multi_open_open_all() {
    let accordion = accordion(3);
    accordion.set_multi_open(true);

    accordion.open_all();

    assert_eq!(open_flags(&accordion), vec![true, true, true]);
    assert_eq!(accordion.min_size().height, 260);
}

#[test]
fn remove_while_open_rebinds_toggle() {
    let accordion = accordion(2);
    accordion.set_multi_open(true);
    let survivor = accordion.item(1).unwrap();

    accordion.open(0);
    accordion.remove_index(0);

    assert_eq!(accordion.len(), 1);
    assert_eq!(accordion.item(0), Some(survivor.clone()));
    assert!(!survivor.is_open());

    let header = Rc::clone(&accordion.renderer().borrow().headers()[0]);
    assert!(tap(&header));
    assert!(survivor.is_open());

    assert!(tap(&header));
    assert!(!survivor.is_open());
}

#[test]
fn surplus_header_hygiene() {
    let accordion = accordion(0);
    let renderer = accordion.renderer();

    for title in ["a", "b", "c"] {
        accordion.append(item(title));
    }
    let b = accordion.item(1).unwrap();
    accordion.remove(&b);
    accordion.remove_index(1);

    let renderer = renderer.borrow();
    assert!(!renderer.headers().is_empty());
    assert!(renderer.headers()[0].borrow().is_visible());
    assert!(renderer.headers()[1..]
        .iter()
        .all(|header| header.borrow().is_hidden()));
    assert_eq!(renderer.objects().len(), 2);
}

#[test]
fn layout_places_open_detail_below_header() {
    let accordion = accordion(3);
    accordion.open(1);
    accordion.resize(Size::new(400, 300));

    let renderer = accordion.renderer();
    let renderer = renderer.borrow();
    let positions: Vec<u16> = renderer
        .headers()
        .iter()
        .map(|header| header.borrow().position().y)
        .collect();
    assert_eq!(positions, vec![0, 24, 112]);

    let detail = accordion.item(1).unwrap().detail();
    assert_eq!(detail.borrow().position(), Position::new(0, 48));
    assert_eq!(detail.borrow().size(), Size::new(400, 60));
    assert!(accordion.item(0).unwrap().detail().borrow().is_hidden());
}

#[test]
fn host_sees_container_through_widget_traits() {
    let accordion = accordion(2);
    let mut widget: Box<dyn Widget> = Box::new(accordion.clone());

    let renderer = widget.create_renderer();
    assert_eq!(renderer.borrow().min_size(), Size::new(100, 44));
    assert_eq!(renderer.borrow().background_color(), Color::Reset);

    widget.resize(Size::new(120, 44));
    assert_eq!(accordion.size(), Size::new(120, 44));

    accordion.open(0);
    assert_eq!(widget.min_size(), Size::new(200, 108));
    assert_eq!(renderer.borrow().objects().len(), 4);
    renderer.borrow_mut().destroy();
}

#[test]
fn nested_accordion_as_detail() {
    let inner = accordion(2);
    let detail: SharedObject = Rc::new(RefCell::new(inner.clone()));
    let outer = AccordionContainer::new(TestHost::new(), [AccordionItem::new("Advanced", detail)]);

    outer.open(0);
    assert_eq!(outer.min_size(), Size::new(100, 20 + 4 + 44));

    inner.open(1);
    assert_eq!(outer.min_size(), Size::new(200, 20 + 4 + 108));
}

#[test]
fn themed_padding_from_config() {
    let theme = StaticTheme::from_json(r#"{ "padding": 1 }"#).unwrap();
    let accordion = AccordionContainer::new(
        TestHost::new().with_theme(theme),
        [item("a"), item("b")],
    );

    assert_eq!(accordion.min_size(), Size::new(100, 41));
    accordion.open(0);
    assert_eq!(accordion.min_size(), Size::new(200, 20 + 1 + 60 + 1 + 20));
}

#[test]
fn direct_item_mutation_is_repaired_by_next_open() {
    let accordion = accordion(3);
    accordion.item(0).unwrap().set_open(true);
    accordion.item(2).unwrap().set_open(true);

    accordion.open(1);
    assert_eq!(open_flags(&accordion), vec![false, true, false]);
}

#[test]
fn debug_text_lists_sections() {
    let accordion = accordion(2);
    accordion.open(0);

    let text = accordion.debug_text();
    assert!(text.contains("mode: single-open"));
    assert!(text.contains("Section 0: open"));
    assert!(text.contains("Section 1: closed"));
}
