use super::*;
use crate::testing::user;

fn loaded(users: Vec<User>) -> DirectoryState {
    DirectoryState { users, ..DirectoryState::default() }
}

#[test]
fn empty_message_hidden_while_loading() {
    let state = DirectoryState { loading: true, ..DirectoryState::default() };
    assert_eq!(empty_message(&state), None);
}

#[test]
fn empty_message_hidden_when_users_visible() {
    let state = loaded(vec![user(1, "George", "Bluth")]);
    assert_eq!(empty_message(&state), None);
}

#[test]
fn empty_message_for_empty_page() {
    assert_eq!(empty_message(&loaded(Vec::new())), Some("No users found."));
}

#[test]
fn empty_message_for_search_without_matches() {
    let mut state = loaded(vec![user(1, "George", "Bluth"), user(2, "Janet", "Weaver")]);
    state.set_search("zzz");
    assert_eq!(empty_message(&state), Some("No users match your search."));
}

