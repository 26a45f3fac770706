
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use bookshelf::{
    query, BookId, Entity, Shelf, ShelfConfig, ShelfError, Store, UiEvent,
};
use support::{add_book, id_of, search, titles};

#[test]
fn library_session() {
    let mut shelf = Shelf::default();

    let view = search(&mut shelf, "lee");
    assert_eq!(titles(&view), vec!["To Kill a Mockingbird"]);

    search(&mut shelf, "");
    let view = add_book(&mut shelf, "Dune", "Frank Herbert");
    assert_eq!(view.total, 3);
    assert_eq!(shelf.store().len(), 3);

    let view = search(&mut shelf, "dune");
    assert_eq!(titles(&view), vec!["Dune"]);

    let gatsby = id_of(&shelf, "The Great Gatsby");
    let view = shelf.dispatch(UiEvent::RemoveClicked(gatsby));
    assert_eq!(view.total, 2);
    assert_eq!(shelf.store().len(), 2);

    for q in ["", "gatsby", "GATSBY", "fitzgerald", "the", "s"] {
        let view = search(&mut shelf, q);
        assert!(
            view.visible.iter().all(|book| book.id() != gatsby),
            "gatsby visible under {:?}",
            q
        );
    }
}

#[test]
fn blank_submissions_are_ignored() {
    let mut shelf = Shelf::default();

    let view = add_book(&mut shelf, "", "Frank Herbert");
    assert_eq!(view.total, 2);
    assert_eq!(view.draft.author, "Frank Herbert");

    let view = add_book(&mut shelf, "Dune", "   ");
    assert_eq!(view.total, 2);
    assert_eq!(view.draft.title, "Dune");
}

#[test]
fn removing_unknown_id_changes_nothing() {
    let mut shelf = Shelf::default();
    let before = shelf.store().list().to_vec();
    let version = shelf.store().entity().version();

    shelf.dispatch(UiEvent::RemoveClicked(BookId::new(1_000)));

    assert_eq!(shelf.store().list(), &before[..]);
    assert_eq!(shelf.store().entity().version(), version);
}

#[test]
fn ids_stay_unique() {
    let mut shelf = Shelf::new(ShelfConfig::empty()).unwrap();
    for round in 0..30 {
        add_book(&mut shelf, &format!("Volume {}", round), "Anon");
        if round % 4 == 1 {
            let last = shelf.store().list().last().map(|b| b.id()).unwrap();
            shelf.dispatch(UiEvent::RemoveClicked(last));
        }
    }

    let ids: HashSet<BookId> = shelf.store().list().iter().map(|b| b.id()).collect();
    assert_eq!(ids.len(), shelf.store().len());
}

#[test]
fn view_is_subsequence_of_store() {
    let mut shelf = Shelf::default();
    add_book(&mut shelf, "Great Expectations", "Charles Dickens");
    add_book(&mut shelf, "Dune", "Frank Herbert");

    let view = search(&mut shelf, "GREAT");
    assert_eq!(titles(&view), vec!["The Great Gatsby", "Great Expectations"]);

    let all = shelf.store().list();
    let mut cursor = all.iter();
    for book in &view.visible {
        assert!(cursor.any(|b| b == book));
    }
}

#[test]
fn filter_case_insensitive_over_store() {
    let store = Store::seeded(&ShelfConfig::default()).unwrap();
    assert_eq!(
        query::filter(store.list(), "GATSBY"),
        query::filter(store.list(), "gatsby")
    );
    assert_eq!(query::filter(store.list(), "").len(), store.len());
}

#[test]
fn one_notification_per_event() {
    let mut shelf = Shelf::default();
    let totals = Rc::new(RefCell::new(Vec::new()));
    let sink = totals.clone();
    shelf.subscribe(move |view| sink.borrow_mut().push(view.total));

    add_book(&mut shelf, "Dune", "Frank Herbert");
    shelf.dispatch(UiEvent::AddClicked);
    shelf.dispatch(UiEvent::RemoveClicked(BookId::new(1)));

    assert_eq!(*totals.borrow(), vec![2, 2, 3, 3, 2]);
}

#[test]
fn event_log_survives_json_and_rebuilds_store() {
    let mut shelf = Shelf::default();
    add_book(&mut shelf, "Dune", "Frank Herbert");
    shelf.dispatch(UiEvent::RemoveClicked(BookId::new(2)));

    let json = serde_json::to_string(shelf.store().entity()).unwrap();
    let entity: Entity = serde_json::from_str(&json).unwrap();
    let rebuilt = Store::hydrate(entity).unwrap();

    assert_eq!(rebuilt.list(), shelf.store().list());
    assert_eq!(rebuilt.last_id(), Some(BookId::new(3)));

    let names: Vec<&str> = rebuilt
        .entity()
        .events()
        .iter()
        .map(|e| e.event_name.as_str())
        .collect();
    assert_eq!(names, vec!["BookAdded", "BookAdded", "BookAdded", "BookRemoved"]);
}

#[test]
fn ui_events_from_json() {
    let mut shelf = Shelf::default();
    let events: Vec<UiEvent> = serde_json::from_str(
        r#"[
            {"type": "DraftTitleChanged", "value": "Dune"},
            {"type": "DraftAuthorChanged", "value": "Frank Herbert"},
            {"type": "AddClicked"},
            {"type": "QueryChanged", "value": "HERBERT"}
        ]"#,
    )
    .unwrap();

    let mut last = None;
    for event in events {
        last = Some(shelf.dispatch(event));
    }
    let view = last.unwrap();
    assert_eq!(titles(&view), vec!["Dune"]);

    let rendered = serde_json::to_value(&view).unwrap();
    assert_eq!(rendered["visible"][0]["id"], 3);
    assert_eq!(rendered["draft"]["title"], "");
}

#[test]
fn config_errors_surface_from_json() {
    let err = ShelfConfig::from_json("{\"seed\": 3}").unwrap_err();
    assert!(matches!(err, ShelfError::Config(_)));
}
