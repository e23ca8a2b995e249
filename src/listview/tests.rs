use super::*;
use crate::debounce::DebounceMsg;
use bubbletea_rs::{KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use std::fmt;

#[derive(Clone, PartialEq, Debug)]
struct Client {
    id: u32,
    name: String,
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.id, self.name)
    }
}

impl Item for Client {
    fn filter_value(&self) -> String {
        self.name.clone()
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "id" => Some(self.id.into()),
            "name" => Some(self.name.as_str().into()),
            _ => None,
        }
    }
}

fn client(id: u32, name: &str) -> Client {
    Client {
        id,
        name: name.to_string(),
    }
}

fn trio() -> Vec<Client> {
    vec![client(1, "Ana"), client(2, "Beto"), client(3, "Caro")]
}

fn names(items: &[Client]) -> Vec<&str> {
    items.iter().map(|c| c.name.as_str()).collect()
}

fn key_msg(code: KeyCode) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    })
}

#[test]
fn test_first_page_and_jump() {
    let mut list = Model::new(trio(), 80, 24).with_page_sizes(&[2, 10]);

    assert_eq!(list.total_pages(), 2);
    assert_eq!(names(&list.visible_items()), vec!["Ana", "Beto"]);

    list.go_to_page(2);
    assert_eq!(names(&list.visible_items()), vec!["Caro"]);
}

#[test]
fn test_sort_key_toggles_direction() {
    let mut list = Model::new(
        vec![client(3, "Caro"), client(1, "Ana"), client(2, "Beto")],
        80,
        24,
    );

    list.set_sort_key("name");
    assert_eq!(names(&list.visible_items()), vec!["Ana", "Beto", "Caro"]);

    list.set_sort_key("name");
    assert_eq!(names(&list.visible_items()), vec!["Caro", "Beto", "Ana"]);
}

#[test]
fn test_sort_toggle_law() {
    let mut list = Model::new(trio(), 80, 24).with_sort_key("name");
    let initial = list.sort_state().unwrap().direction;

    list.set_sort_key("name");
    list.set_sort_key("name");
    assert_eq!(list.sort_state().unwrap().direction, initial);

    list.set_sort_key("name");
    list.set_sort_key("name");
    list.set_sort_key("name");
    list.set_sort_key("name");
    assert_eq!(list.sort_state().unwrap().direction, initial);
}

#[test]
fn test_switching_sort_key_starts_ascending() {
    let mut list = Model::new(trio(), 80, 24);
    list.set_sort_key("name");
    list.set_sort_key("name"); // now descending
    list.set_sort_key("id");
    let sort = list.sort_state().unwrap();
    assert_eq!(sort.key, "id");
    assert_eq!(sort.direction, SortDirection::Ascending);
}

#[test]
fn test_sort_does_not_reset_page() {
    let items: Vec<Client> = (1..=25).map(|i| client(i, &format!("c{i:02}"))).collect();
    let mut list = Model::new(items, 80, 24); // 3 pages of 10
    list.go_to_page(3);
    list.set_sort_key("name");
    assert_eq!(list.current_page(), 3);
}

#[test]
fn test_descending_keeps_tie_break_order() {
    // Equal keys keep insertion order in both directions: the direction
    // reverses the comparator, not the output.
    let items = vec![
        client(1, "dup"),
        client(2, "dup"),
        client(3, "aaa"),
        client(4, "dup"),
    ];
    let mut list = Model::new(items, 80, 24);

    list.set_sort_key("name");
    let ids: Vec<u32> = list.visible_items().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![3, 1, 2, 4]);

    list.set_sort_key("name");
    let ids: Vec<u32> = list.visible_items().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 4, 3]);
}

#[test]
fn test_predicate_filter_resets_page_and_recounts() {
    let mut list = Model::new(trio(), 80, 24).with_page_sizes(&[2, 10]);
    list.go_to_page(2);

    list.set_filter(Some(Box::new(|c: &Client| c.name.starts_with('B'))));
    assert_eq!(names(&list.visible_items()), vec!["Beto"]);
    assert_eq!(list.current_page(), 1);
    assert_eq!(list.total_pages(), 1);
}

#[test]
fn test_query_filter_is_case_insensitive_substring() {
    let mut list = Model::new(trio(), 80, 24);
    list.set_filter_query("AN");
    assert_eq!(names(&list.visible_items()), vec!["Ana"]);

    list.set_filter_query("");
    assert_eq!(list.len(), 3);
    assert_eq!(list.filter_state(), FilterState::Unfiltered);
}

#[test]
fn test_fuzzy_query_matching() {
    let mut list = Model::new(trio(), 80, 24).with_filter_matching(FilterMatching::Fuzzy);
    list.set_filter_query("bt");
    assert_eq!(names(&list.visible_items()), vec!["Beto"]);
}

#[test]
fn test_predicate_and_query_compose() {
    let items = vec![
        client(1, "Ana"),
        client(2, "Anabel"),
        client(3, "Beto"),
    ];
    let mut list = Model::new(items, 80, 24);
    list.set_filter(Some(Box::new(|c: &Client| c.id > 1)));
    list.set_filter_query("ana");
    assert_eq!(names(&list.visible_items()), vec!["Anabel"]);
}

#[test]
fn test_filter_matching_nothing_behaves_like_empty() {
    let mut list = Model::new(trio(), 80, 24);
    list.set_filter_query("zzz");

    assert!(list.is_empty());
    assert!(list.visible_items().is_empty());
    assert_eq!(list.total_pages(), 1);
    assert_eq!(list.current_page(), 1);
    // The backing collection is untouched.
    assert_eq!(list.items().len(), 3);
}

#[test]
fn test_clear_filter_restores_everything() {
    let mut list = Model::new(trio(), 80, 24);
    list.set_filter(Some(Box::new(|c: &Client| c.id == 2)));
    list.set_filter_query("beto");
    assert_eq!(list.len(), 1);

    list.clear_filter();
    assert_eq!(list.len(), 3);
    assert_eq!(list.filter_state(), FilterState::Unfiltered);
    assert!(!list.has_filter());
}

#[test]
fn test_empty_items() {
    let list: Model<Client> = Model::new(vec![], 80, 24);
    assert!(list.visible_items().is_empty());
    assert_eq!(list.total_pages(), 1);
    assert_eq!(list.current_page(), 1);
    assert_eq!(list.page_range(), (0, 0, 0));
}

#[test]
fn test_page_size_larger_than_collection() {
    let list = Model::new(trio(), 80, 24).with_page_size(100);
    assert_eq!(list.total_pages(), 1);
    assert_eq!(list.visible_items().len(), 3);
}

#[test]
fn test_total_pages_law() {
    let items: Vec<Client> = (1..=95).map(|i| client(i, &format!("c{i}"))).collect();
    let mut list = Model::new(items, 80, 24);
    for (size, expected) in [(10, 10), (25, 4), (50, 2), (100, 1)] {
        list.set_page_size(size);
        assert_eq!(list.total_pages(), expected, "page size {}", size);
    }
}

#[test]
fn test_pages_partition_the_collection() {
    let items: Vec<Client> = (1..=23).map(|i| client(i, &format!("c{i:02}"))).collect();
    let mut list = Model::new(items.clone(), 80, 24).with_sort_key("name");

    let mut seen = Vec::new();
    for page in 1..=list.total_pages() {
        list.go_to_page(page);
        let slice = list.visible_items();
        assert!(slice.len() <= list.page_size());
        seen.extend(slice);
    }

    // Union of all pages, in order, is the whole sorted collection:
    // nothing duplicated, nothing dropped.
    assert_eq!(seen, items);
}

#[test]
fn test_go_to_page_is_idempotent() {
    let items: Vec<Client> = (1..=30).map(|i| client(i, &format!("c{i}"))).collect();
    let mut list = Model::new(items, 80, 24);
    list.go_to_page(2);
    let first = list.visible_items();
    list.go_to_page(list.current_page());
    assert_eq!(list.visible_items(), first);
}

#[test]
fn test_out_of_range_page_jump_is_ignored() {
    let mut list = Model::new(trio(), 80, 24).with_page_sizes(&[2, 10]);
    list.go_to_page(2);
    list.go_to_page(0);
    list.go_to_page(99);
    assert_eq!(list.current_page(), 2);
}

#[test]
fn test_disallowed_page_size_is_ignored() {
    let mut list = Model::new(trio(), 80, 24);
    list.set_page_size(37);
    assert_eq!(list.page_size(), 10);
}

#[test]
fn test_page_size_change_resets_page() {
    let items: Vec<Client> = (1..=60).map(|i| client(i, &format!("c{i}"))).collect();
    let mut list = Model::new(items, 80, 24);
    list.go_to_page(5);
    list.set_page_size(25);
    assert_eq!(list.current_page(), 1);
    assert_eq!(list.page_size(), 25);
}

#[test]
fn test_shrinking_collection_clamps_page() {
    let items: Vec<Client> = (1..=50).map(|i| client(i, &format!("c{i}"))).collect();
    let mut list = Model::new(items, 80, 24); // 5 pages
    list.go_to_page(5);

    let fewer: Vec<Client> = (1..=12).map(|i| client(i, &format!("c{i}"))).collect();
    list.set_items(fewer);

    assert_eq!(list.total_pages(), 2);
    assert_eq!(list.current_page(), 2);
    // The clamped page still shows the tail, not an empty slice.
    assert_eq!(list.visible_items().len(), 2);
}

#[test]
fn test_page_range() {
    let items: Vec<Client> = (1..=23).map(|i| client(i, &format!("c{i}"))).collect();
    let mut list = Model::new(items, 80, 24);
    assert_eq!(list.page_range(), (1, 10, 23));
    list.go_to_page(3);
    assert_eq!(list.page_range(), (21, 23, 23));
}

#[test]
fn test_cycle_page_size_wraps() {
    let mut list = Model::new(trio(), 80, 24);
    for expected in [25, 50, 100, 10] {
        list.cycle_page_size();
        assert_eq!(list.page_size(), expected);
    }
}

#[test]
fn test_key_navigation_emits_page_changed() {
    let items: Vec<Client> = (1..=30).map(|i| client(i, &format!("c{i}"))).collect();
    let mut list = Model::new(items, 80, 24);

    let cmd = list.update(key_msg(KeyCode::Right));
    assert_eq!(list.current_page(), 2);
    assert!(cmd.is_some());

    // Already on the last page: no movement, no notification.
    list.go_to_page(3);
    let cmd = list.update(key_msg(KeyCode::Right));
    assert_eq!(list.current_page(), 3);
    assert!(cmd.is_none());
}

#[test]
fn test_key_driven_sort_uses_configured_columns() {
    let mut list = Model::new(trio(), 80, 24).with_sort_keys(&["name", "id"]);

    let cmd = list.update(key_msg(KeyCode::Char('s')));
    assert!(cmd.is_some());
    let sort = list.sort_state().unwrap();
    assert_eq!(sort.key, "name");
    assert_eq!(sort.direction, SortDirection::Ascending);

    list.update(key_msg(KeyCode::Char('s')));
    assert_eq!(
        list.sort_state().unwrap().direction,
        SortDirection::Descending
    );

    list.update(key_msg(KeyCode::Char('S')));
    let sort = list.sort_state().unwrap();
    assert_eq!(sort.key, "id");
    assert_eq!(sort.direction, SortDirection::Ascending);
}

#[test]
fn test_filter_entry_flow() {
    let mut list = Model::new(trio(), 80, 24);

    list.update(key_msg(KeyCode::Char('/')));
    assert_eq!(list.filter_state(), FilterState::Filtering);

    // Keystrokes re-arm the debouncer; the query is not applied yet.
    let cmd = list.update(key_msg(KeyCode::Char('b')));
    assert!(cmd.is_some());
    assert_eq!(list.len(), 3);

    let cmd = list.update(key_msg(KeyCode::Enter));
    assert!(cmd.is_some());
    assert_eq!(list.filter_state(), FilterState::FilterApplied);
    assert_eq!(names(&list.visible_items()), vec!["Beto"]);
    assert_eq!(list.filter_query(), "b");
}

#[test]
fn test_filter_entry_backspace_and_cancel() {
    let mut list = Model::new(trio(), 80, 24);
    list.update(key_msg(KeyCode::Char('/')));
    list.update(key_msg(KeyCode::Char('x')));
    list.update(key_msg(KeyCode::Char('y')));
    list.update(key_msg(KeyCode::Backspace));

    list.update(key_msg(KeyCode::Esc));
    assert_eq!(list.filter_state(), FilterState::Unfiltered);
    assert_eq!(list.len(), 3);
    assert_eq!(list.filter_query(), "");
}

#[test]
fn test_debounced_filter_application() {
    let mut list = Model::new(trio(), 80, 24);
    list.update(key_msg(KeyCode::Char('/')));
    list.update(key_msg(KeyCode::Char('c')));

    // The debounce message for the latest keystroke applies the query.
    let msg: Msg = Box::new(DebounceMsg {
        id: list.debounce.id(),
        tag: 1,
    });
    let cmd = list.update(msg);
    assert!(cmd.is_some());
    assert_eq!(list.filter_query(), "c");
    assert_eq!(names(&list.visible_items()), vec!["Caro"]);
    // Still in filter entry until the user accepts or cancels.
    assert_eq!(list.filter_state(), FilterState::Filtering);
}

#[test]
fn test_stale_debounce_message_is_ignored() {
    let mut list = Model::new(trio(), 80, 24);
    list.update(key_msg(KeyCode::Char('/')));
    list.update(key_msg(KeyCode::Char('c')));
    list.update(key_msg(KeyCode::Char('a')));

    // The first keystroke's message arrives after the second keystroke.
    let stale: Msg = Box::new(DebounceMsg {
        id: list.debounce.id(),
        tag: 1,
    });
    let cmd = list.update(stale);
    assert!(cmd.is_none());
    assert_eq!(list.filter_query(), "");
}

#[test]
fn test_clear_filter_key_emits_notification() {
    let mut list = Model::new(trio(), 80, 24);
    list.set_filter_query("b");
    assert_eq!(list.len(), 1);

    let cmd = list.update(key_msg(KeyCode::Esc));
    assert!(cmd.is_some());
    assert_eq!(list.len(), 3);
    assert!(!list.has_filter());

    // Esc with nothing to clear is a no-op.
    let cmd = list.update(key_msg(KeyCode::Esc));
    assert!(cmd.is_none());
}

#[test]
fn test_view_renders_all_sections() {
    let mut list = Model::new(trio(), 80, 24)
        .with_title("Clients")
        .with_page_sizes(&[2, 10]);
    list.set_status_bar_item_name("client", "clients");

    let view = list.view();
    assert!(view.contains("Clients"));
    assert!(view.contains("Ana"));
    assert!(view.contains("1–2 of 3 clients"));
    assert!(view.contains("1/2"));
}

#[test]
fn test_view_empty_state() {
    let list: Model<Client> = Model::new(vec![], 80, 24);
    assert!(list.view().contains("No items."));
}
