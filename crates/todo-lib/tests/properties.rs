use proptest::prelude::*;
use todo_lib::{Dispatcher, Outcome, Request, TodoError, TodoItem, TodoList, document};

fn texts() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z ]{0,12}", 0..16)
}

fn ids(list: &TodoList) -> Vec<u64> {
    list.items().iter().map(|item| item.id).collect()
}

proptest! {
    #[test]
    fn adds_keep_ids_dense(texts in texts()) {
        let mut list = TodoList::new();
        for text in &texts {
            list.add(text.clone());
        }
        let expected: Vec<u64> = (1..=texts.len() as u64).collect();
        prop_assert_eq!(ids(&list), expected);
        prop_assert!(list.is_dense());
    }

    #[test]
    fn remove_keeps_ids_dense(texts in texts().prop_filter("non-empty", |t| !t.is_empty()), pick in any::<prop::sample::Index>()) {
        let mut list = TodoList::new();
        for text in &texts {
            list.add(text.clone());
        }
        let id = pick.index(texts.len()) as u64 + 1;

        let removed = list.remove(id).unwrap();
        prop_assert_eq!(&removed.text, &texts[(id - 1) as usize]);

        let expected: Vec<u64> = (1..texts.len() as u64).collect();
        prop_assert_eq!(ids(&list), expected);

        let mut remaining = texts.clone();
        remaining.remove((id - 1) as usize);
        let kept: Vec<String> = list.items().iter().map(|item| item.text.clone()).collect();
        prop_assert_eq!(kept, remaining);
    }

    #[test]
    fn change_after_remove_rejects_last_id(texts in texts().prop_filter("non-empty", |t| !t.is_empty())) {
        let mut list = TodoList::new();
        for text in &texts {
            list.add(text.clone());
        }
        let last = texts.len() as u64;
        list.remove(1).unwrap();
        let result = list.change(last, "x");
        prop_assert!(matches!(result, Err(TodoError::InvalidId { .. })), "expected InvalidId error, got {:?}", result);
    }

    #[test]
    fn save_then_load_roundtrips(texts in texts()) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todo.json");
        let mut list = TodoList::new();
        for text in &texts {
            list.add(text.clone());
        }

        document::save(&path, &list).unwrap();
        prop_assert_eq!(document::load(&path).unwrap(), list);
    }
}

#[test]
fn scenario_change_unknown_id_leaves_disk_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todo.json");
    let dispatcher = Dispatcher::standard(&path);
    for text in ["a", "b", "c"] {
        dispatcher.handle(Request::add(text)).unwrap();
    }
    let before = std::fs::read_to_string(&path).unwrap();

    let outcome = dispatcher.handle(Request::change(5, "x")).unwrap();
    assert!(outcome.is_rejected());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    assert_eq!(
        document::load(&path).unwrap().into_items(),
        vec![
            TodoItem::new(1, "a"),
            TodoItem::new(2, "b"),
            TodoItem::new(3, "c")
        ]
    );
}

#[test]
fn scenario_show_after_removing_everything() {
    let dir = tempfile::tempdir().unwrap();
    let dispatcher = Dispatcher::standard(dir.path().join("todo.json"));
    dispatcher.handle(Request::add("only")).unwrap();
    dispatcher.handle(Request::remove(1)).unwrap();

    assert_eq!(dispatcher.handle(Request::show()).unwrap(), Outcome::Empty);
}
