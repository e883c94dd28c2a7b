//! Domain-level tests for the TaskList collection and its operations

use task_list::{Filter, Priority, TaskList};

#[test]
fn test_add_empty_text_is_a_no_op() {
    let mut list = TaskList::new();
    assert!(list.add("", Priority::Medium).is_none());
    assert!(list.add("   ", Priority::Medium).is_none());
    assert!(list.is_empty());

    // Also from a non-empty prior state
    list.add("existing", Priority::Medium);
    let snapshot = list.clone();
    assert!(list.add("", Priority::High).is_none());
    assert!(list.add(" \t ", Priority::Low).is_none());
    assert_eq!(list, snapshot);
}

#[test]
fn test_add_grows_by_one_with_fresh_id() {
    let mut list = TaskList::new();
    list.add("first", Priority::Medium);
    let before: Vec<u64> = list.items().iter().map(|i| i.id).collect();

    let id = list.add("second", Priority::Medium).unwrap();
    assert_eq!(list.len(), 2);
    assert!(!before.contains(&id));

    let item = list.find_by_id(id).unwrap();
    assert!(!item.completed);
    assert_eq!(item.text, "second");
}

#[test]
fn test_add_uses_given_priority() {
    let mut list = TaskList::new();
    let id = list.add("urgent thing", Priority::High).unwrap();
    assert_eq!(list.find_by_id(id).unwrap().priority, Priority::High);
}

#[test]
fn test_toggle_twice_restores_original_state() {
    let mut list = TaskList::new();
    let id = list.add("flip me", Priority::Medium).unwrap();

    assert!(list.toggle_complete(id));
    assert!(list.find_by_id(id).unwrap().completed);

    assert!(list.toggle_complete(id));
    assert!(!list.find_by_id(id).unwrap().completed);
}

#[test]
fn test_toggle_unknown_id_leaves_collection_unchanged() {
    let mut list = TaskList::new();
    list.add("one", Priority::Medium);
    list.add("two", Priority::High);
    let snapshot = list.clone();

    assert!(!list.toggle_complete(999));
    assert_eq!(list, snapshot);
}

#[test]
fn test_delete_twice_second_call_is_a_no_op() {
    let mut list = TaskList::new();
    let id = list.add("doomed", Priority::Medium).unwrap();

    assert!(list.delete_item(id).is_some());
    assert!(list.delete_item(id).is_none());
    assert!(list.find_by_id(id).is_none());
}

#[test]
fn test_edit_text_is_verbatim_no_trim_no_check() {
    let mut list = TaskList::new();
    let id = list.add("original", Priority::Medium).unwrap();

    assert!(list.edit_text(id, "   "));
    assert_eq!(list.find_by_id(id).unwrap().text, "   ");

    assert!(list.edit_text(id, ""));
    assert_eq!(list.find_by_id(id).unwrap().text, "");

    // Unknown id: silent no-op
    assert!(!list.edit_text(999, "whatever"));
}

#[test]
fn test_edit_does_not_touch_other_fields() {
    let mut list = TaskList::new();
    let id = list.add("original", Priority::High).unwrap();
    let created = list.find_by_id(id).unwrap().created_at;

    list.edit_text(id, "rewritten");

    let item = list.find_by_id(id).unwrap();
    assert_eq!(item.id, id);
    assert_eq!(item.priority, Priority::High);
    assert_eq!(item.created_at, created);
    assert!(!item.completed);
}

#[test]
fn test_clear_completed_is_idempotent() {
    let mut list = TaskList::new();
    list.add("keep", Priority::Medium);
    let a = list.add("done a", Priority::Medium).unwrap();
    let b = list.add("done b", Priority::Medium).unwrap();
    list.toggle_complete(a);
    list.toggle_complete(b);

    assert_eq!(list.clear_completed(), 2);
    let after_first = list.clone();

    assert_eq!(list.clear_completed(), 0);
    assert_eq!(list, after_first);
}

#[test]
fn test_stats_invariant_over_reachable_states() {
    let mut list = TaskList::new();
    let check = |list: &TaskList| {
        let stats = list.stats();
        assert_eq!(stats.total, stats.active + stats.completed);
    };

    check(&list);
    let a = list.add("a", Priority::Medium).unwrap();
    check(&list);
    let b = list.add("b", Priority::Low).unwrap();
    check(&list);
    list.toggle_complete(a);
    check(&list);
    list.edit_text(b, "");
    check(&list);
    list.clear_completed();
    check(&list);
    list.delete_item(b);
    check(&list);
}

// Scenario from the editor's intended flow: two adds, one completion, one
// sweep. Newest item is shown first throughout.
#[test]
fn test_scenario_add_toggle_clear() {
    let mut list = TaskList::new();
    let milk = list.add("buy milk", Priority::High).unwrap();
    list.add("call mom", Priority::Low);

    assert_eq!(list.len(), 2);
    assert_eq!(list.items()[0].text, "call mom");
    assert_eq!(list.items()[1].text, "buy milk");

    let stats = list.stats();
    assert_eq!((stats.active, stats.completed), (2, 0));

    list.toggle_complete(milk);
    let stats = list.stats();
    assert_eq!((stats.active, stats.completed), (1, 1));

    list.clear_completed();
    assert_eq!(list.len(), 1);
    assert_eq!(list.items()[0].text, "call mom");
}

#[test]
fn test_visible_subsets_by_filter() {
    let mut list = TaskList::new();
    let a = list.add("active one", Priority::Medium).unwrap();
    let d = list.add("done one", Priority::Medium).unwrap();
    list.toggle_complete(d);

    assert_eq!(list.visible(Filter::All).len(), 2);

    let active = list.visible(Filter::Active);
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, a);

    let completed = list.visible(Filter::Completed);
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].id, d);

    // Filtering only changes visibility, never the collection
    assert_eq!(list.len(), 2);
}
