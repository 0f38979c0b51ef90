//! Fakes shared by unit tests: scripted API, in-memory token store, and a
//! notifier that records what it was told.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use leptos::prelude::*;

use crate::net::api::{ApiError, UserApi};
use crate::net::types::{Credentials, User, UserPage};
use crate::services::Services;
use crate::state::session::{SessionState, SessionStore};
use crate::util::notify::{Notifier, NotifyKind};
use crate::util::storage::TokenStore;

pub use futures::executor::block_on;

pub fn user(id: u64, first_name: &str, last_name: &str) -> User {
    User {
        id,
        email: format!("{}.{}@reqres.in", first_name.to_lowercase(), last_name.to_lowercase()),
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        avatar: format!("https://reqres.in/img/faces/{id}-image.jpg"),
    }
}

pub fn page(number: u32, total_pages: u32, data: Vec<User>) -> UserPage {
    let per_page = u32::try_from(data.len()).unwrap_or(u32::MAX);
    UserPage { data, page: number, per_page, total: per_page * total_pages, total_pages }
}

// =============================================================
// FakeApi
// =============================================================

/// Scripted `UserApi`. Unscripted calls fail with `ApiError::Status(500)`.
#[derive(Default)]
pub struct FakeApi {
    accepted: Mutex<Option<(Credentials, String)>>,
    pages: Mutex<HashMap<u32, Result<UserPage, ApiError>>>,
    update_error: Mutex<Option<ApiError>>,
    delete_error: Mutex<Option<ApiError>>,
    calls: Mutex<Vec<String>>,
    tokens: Mutex<Vec<Option<String>>>,
}

impl FakeApi {
    /// Accept exactly `email`/`password` and answer with `token`.
    pub fn accepting(email: &str, password: &str, token: &str) -> Self {
        let api = Self::default();
        *api.accepted.lock().unwrap() = Some((
            Credentials { email: email.to_owned(), password: password.to_owned() },
            token.to_owned(),
        ));
        api
    }

    pub fn with_page(self, number: u32, result: Result<UserPage, ApiError>) -> Self {
        self.pages.lock().unwrap().insert(number, result);
        self
    }

    pub fn failing_updates(self, err: ApiError) -> Self {
        *self.update_error.lock().unwrap() = Some(err);
        self
    }

    pub fn failing_deletes(self, err: ApiError) -> Self {
        *self.delete_error.lock().unwrap() = Some(err);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn tokens_seen(&self) -> Vec<Option<String>> {
        self.tokens.lock().unwrap().clone()
    }

    fn record(&self, call: String, token: Option<&str>) {
        self.calls.lock().unwrap().push(call);
        self.tokens.lock().unwrap().push(token.map(str::to_owned));
    }
}

#[async_trait(?Send)]
impl UserApi for FakeApi {
    async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        self.record(format!("login {}", credentials.email), None);
        match self.accepted.lock().unwrap().as_ref() {
            Some((expected, token)) if expected == credentials => Ok(token.clone()),
            _ => Err(ApiError::Status(400)),
        }
    }

    async fn list_users(&self, page: u32, token: Option<&str>) -> Result<UserPage, ApiError> {
        self.record(format!("list {page}"), token);
        self.pages.lock().unwrap().get(&page).cloned().unwrap_or(Err(ApiError::Status(500)))
    }

    async fn update_user(&self, user: &User, token: Option<&str>) -> Result<(), ApiError> {
        self.record(format!("update {}", user.id), token);
        self.update_error.lock().unwrap().clone().map_or(Ok(()), Err)
    }

    async fn delete_user(&self, id: u64, token: Option<&str>) -> Result<(), ApiError> {
        self.record(format!("delete {id}"), token);
        self.delete_error.lock().unwrap().clone().map_or(Ok(()), Err)
    }
}

// =============================================================
// MemoryTokenStore
// =============================================================

#[derive(Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn holding(token: &str) -> Self {
        Self { token: Mutex::new(Some(token.to_owned())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn save(&self, token: &str) {
        *self.token.lock().unwrap() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.token.lock().unwrap() = None;
    }
}

// =============================================================
// RecordingNotifier
// =============================================================

#[derive(Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<(NotifyKind, String)>>,
}

impl RecordingNotifier {
    pub fn events(&self) -> Vec<(NotifyKind, String)> {
        self.events.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<(NotifyKind, String)> {
        self.events.lock().unwrap().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: NotifyKind, message: &str) {
        self.events.lock().unwrap().push((kind, message.to_owned()));
    }
}

// =============================================================
// Harness
// =============================================================

/// A session store wired to fakes, with handles kept for assertions.
pub struct Harness {
    pub api: Arc<FakeApi>,
    pub storage: Arc<MemoryTokenStore>,
    pub notifier: Arc<RecordingNotifier>,
    pub session: SessionStore,
}

impl Harness {
    pub fn new(api: FakeApi, storage: MemoryTokenStore) -> Self {
        let api = Arc::new(api);
        let storage = Arc::new(storage);
        let notifier = Arc::new(RecordingNotifier::default());
        let services = Services { api: api.clone(), storage: storage.clone(), notifier: notifier.clone() };
        let session = SessionStore::new(RwSignal::new(SessionState::default()), services);
        Self { api, storage, notifier, session }
    }

    pub fn signed_in(api: FakeApi, token: &str) -> Self {
        let harness = Self::new(api, MemoryTokenStore::holding(token));
        harness.session.rehydrate();
        harness
    }

    pub fn session_state(&self) -> SessionState {
        self.session.state().get_untracked()
    }
}
