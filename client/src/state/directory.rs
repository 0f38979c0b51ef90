//! User-directory state and the store driving it.
//!
//! DESIGN
//! ======
//! `DirectoryState` is plain data with synchronous transitions; the
//! `DirectoryStore` wraps it in a signal and performs the remote calls.
//! Search only filters the page currently cached and never reaches the API.
//!
//! CONCURRENCY
//! ===========
//! Page fetches are not cancelled. Each fetch takes a sequence number from
//! `begin_load`; a response whose sequence is not the latest is dropped, so
//! rapid page changes settle on the last page requested.

#[cfg(test)]
#[path = "directory_test.rs"]
mod directory_test;

use leptos::prelude::*;

use crate::net::types::{User, UserPage};
use crate::services::Services;
use crate::state::session::SessionState;

pub const FETCH_FAILURE_MESSAGE: &str = "Failed to fetch users";
pub const UPDATE_SUCCESS_MESSAGE: &str = "User updated successfully";
pub const UPDATE_FAILURE_MESSAGE: &str = "Failed to update user";
pub const DELETE_SUCCESS_MESSAGE: &str = "User deleted successfully";
pub const DELETE_FAILURE_MESSAGE: &str = "Failed to delete user";

pub fn fetch_success_message(page: u32, total_pages: u32) -> String {
    format!("Loaded page {page} of {total_pages}")
}

/// Case-insensitive substring match of `text` against each user's full name.
///
/// An empty `text` keeps every user. Order is preserved.
pub fn filter_users(users: &[User], text: &str) -> Vec<User> {
    let needle = text.to_lowercase();
    users
        .iter()
        .filter(|user| user.full_name().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// One pagination control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageButton {
    pub number: u32,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryState {
    /// 1-based page currently shown.
    pub page: u32,
    pub total_pages: u32,
    /// Cached records of `page`, in server order.
    pub users: Vec<User>,
    pub search: String,
    pub loading: bool,
    /// Draft copy of the record in the edit form.
    pub editing: Option<User>,
    /// Sequence of the most recently issued page fetch.
    pub latest_request: u64,
}

impl Default for DirectoryState {
    fn default() -> Self {
        Self {
            page: 1,
            total_pages: 1,
            users: Vec::new(),
            search: String::new(),
            loading: false,
            editing: None,
            latest_request: 0,
        }
    }
}

impl DirectoryState {
    /// Users on the cached page that match the search text.
    pub fn visible_users(&self) -> Vec<User> {
        filter_users(&self.users, &self.search)
    }

    /// One button per page, `1..=total_pages`, no windowing.
    pub fn page_buttons(&self) -> Vec<PageButton> {
        (1..=self.total_pages).map(|number| PageButton { number, active: number == self.page }).collect()
    }

    pub fn set_search(&mut self, text: &str) {
        text.clone_into(&mut self.search);
    }

    /// Mark a fetch as in flight and return its sequence number.
    pub fn begin_load(&mut self) -> u64 {
        self.latest_request += 1;
        self.loading = true;
        self.latest_request
    }

    fn is_current(&self, seq: u64) -> bool {
        seq == self.latest_request
    }

    /// Replace the cached page. Returns `false` for a superseded response.
    pub fn apply_page(&mut self, seq: u64, result: UserPage) -> bool {
        if !self.is_current(seq) {
            return false;
        }
        self.users = result.data;
        self.page = result.page.max(1);
        self.total_pages = result.total_pages;
        self.loading = false;
        true
    }

    /// Clear the loading flag, keeping the stale page visible.
    pub fn apply_load_failure(&mut self, seq: u64) -> bool {
        if !self.is_current(seq) {
            return false;
        }
        self.loading = false;
        true
    }

    /// Open the edit form on a copy of `user`.
    pub fn begin_edit(&mut self, user: &User) {
        self.editing = Some(user.clone());
    }

    pub fn edit_draft(&mut self, edit: impl FnOnce(&mut User)) {
        if let Some(draft) = self.editing.as_mut() {
            edit(draft);
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Swap in the committed record (matched by id) and close the form.
    pub fn apply_update(&mut self, updated: User) {
        if let Some(slot) = self.users.iter_mut().find(|u| u.id == updated.id) {
            *slot = updated;
        }
        self.editing = None;
    }

    /// Remove the record with `id`. Returns whether one was present.
    pub fn apply_delete(&mut self, id: u64) -> bool {
        let before = self.users.len();
        self.users.retain(|u| u.id != id);
        self.users.len() != before
    }
}

/// Remote operations over a `DirectoryState` signal.
#[derive(Clone)]
pub struct DirectoryStore {
    state: RwSignal<DirectoryState>,
    session: RwSignal<SessionState>,
    services: Services,
}

impl DirectoryStore {
    pub fn new(state: RwSignal<DirectoryState>, session: RwSignal<SessionState>, services: Services) -> Self {
        Self { state, session, services }
    }

    pub fn state(&self) -> RwSignal<DirectoryState> {
        self.state
    }

    fn token(&self) -> Option<String> {
        self.session.with_untracked(|s| s.token.clone())
    }

    /// Fetch page `page`, replacing the cached users on success.
    pub async fn load_page(&self, page: u32) {
        let seq = self.state.try_update(DirectoryState::begin_load).unwrap_or_default();
        let token = self.token();
        leptos::logging::log!("fetching users page {page} (request {seq})");
        match self.services.api.list_users(page, token.as_deref()).await {
            Ok(result) => {
                let (number, total) = (result.page, result.total_pages);
                let applied = self.state.try_update(|s| s.apply_page(seq, result)).unwrap_or(false);
                if applied {
                    self.services.notifier.success(&fetch_success_message(number, total));
                } else {
                    leptos::logging::log!("dropping stale users page {page} (request {seq})");
                }
            }
            Err(err) => {
                leptos::logging::warn!("fetching users page {page} failed: {err}");
                if self.state.try_update(|s| s.apply_load_failure(seq)).unwrap_or(false) {
                    self.services.notifier.error(FETCH_FAILURE_MESSAGE);
                }
            }
        }
    }

    /// Move to page `page` and fetch it.
    pub async fn change_page(&self, page: u32) {
        self.state.update(|s| s.page = page.max(1));
        self.load_page(page).await;
    }

    pub fn search(&self, text: &str) {
        self.state.update(|s| s.set_search(text));
    }

    pub fn begin_edit(&self, user: &User) {
        self.state.update(|s| s.begin_edit(user));
    }

    pub fn cancel_edit(&self) {
        self.state.update(DirectoryState::cancel_edit);
    }

    /// Send `updated` to the API. On failure the form and its draft stay open.
    ///
    /// Returns whether the update was committed.
    pub async fn commit_edit(&self, updated: User) -> bool {
        let token = self.token();
        match self.services.api.update_user(&updated, token.as_deref()).await {
            Ok(()) => {
                self.state.update(|s| s.apply_update(updated));
                self.services.notifier.success(UPDATE_SUCCESS_MESSAGE);
                true
            }
            Err(err) => {
                leptos::logging::warn!("updating user {} failed: {err}", updated.id);
                self.services.notifier.error(UPDATE_FAILURE_MESSAGE);
                false
            }
        }
    }

    /// Delete user `id`. The cached list only changes on success.
    pub async fn delete_user(&self, id: u64) -> bool {
        let token = self.token();
        match self.services.api.delete_user(id, token.as_deref()).await {
            Ok(()) => {
                self.state.update(|s| {
                    s.apply_delete(id);
                });
                self.services.notifier.success(DELETE_SUCCESS_MESSAGE);
                true
            }
            Err(err) => {
                leptos::logging::warn!("deleting user {id} failed: {err}");
                self.services.notifier.error(DELETE_FAILURE_MESSAGE);
                false
            }
        }
    }
}
