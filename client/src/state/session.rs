//! Auth-session state and the store that owns it.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `RwSignal<SessionState>` is provided through context. The route guard
//! reads it, `SessionStore` is the only writer. Navigation requested by login
//! and logout is recorded in `pending_route` and consumed by an effect inside
//! the router, so the store never holds a router handle.
//!
//! STATE MACHINE
//! =============
//! `Unauthenticated -> Authenticating -> Authenticated` on login success,
//! `Authenticating ->` prior phase on failure, `Authenticated ->
//! Unauthenticated` on logout.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api::ApiError;
use crate::net::types::Credentials;
use crate::services::Services;

pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful!";
pub const LOGIN_FAILURE_MESSAGE: &str = "Login failed. Please check your credentials.";
pub const LOGOUT_MESSAGE: &str = "Logged out successfully";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthPhase {
    #[default]
    Unauthenticated,
    Authenticating,
    Authenticated,
}

/// Client routes the session can request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Users,
}

impl AppRoute {
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Users => "/users",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub phase: AuthPhase,
    /// Set once durable storage has been read on the client.
    pub rehydrated: bool,
    /// Navigation requested by the last login/logout, not yet performed.
    pub pending_route: Option<AppRoute>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Adopt a token read from storage at startup.
    pub fn rehydrate(&mut self, stored: Option<String>) {
        if self.token.is_none() {
            if let Some(token) = stored {
                self.token = Some(token);
                self.phase = AuthPhase::Authenticated;
            }
        }
        self.rehydrated = true;
    }

    pub fn begin_login(&mut self) {
        self.phase = AuthPhase::Authenticating;
    }

    pub fn complete_login(&mut self, token: String) {
        self.token = Some(token);
        self.phase = AuthPhase::Authenticated;
        self.rehydrated = true;
        self.pending_route = Some(AppRoute::Users);
    }

    /// Return to whatever phase the current token implies; the token itself is untouched.
    pub fn fail_login(&mut self) {
        self.phase = if self.token.is_some() { AuthPhase::Authenticated } else { AuthPhase::Unauthenticated };
    }

    pub fn clear(&mut self) {
        self.token = None;
        self.phase = AuthPhase::Unauthenticated;
        self.rehydrated = true;
        self.pending_route = Some(AppRoute::Login);
    }

    pub fn take_pending_route(&mut self) -> Option<AppRoute> {
        self.pending_route.take()
    }
}

/// Owner of the session signal: login, logout, and startup rehydration.
#[derive(Clone)]
pub struct SessionStore {
    state: RwSignal<SessionState>,
    services: Services,
}

impl SessionStore {
    pub fn new(state: RwSignal<SessionState>, services: Services) -> Self {
        Self { state, services }
    }

    pub fn state(&self) -> RwSignal<SessionState> {
        self.state
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    /// Current token without subscribing the caller.
    pub fn token(&self) -> Option<String> {
        self.state.with_untracked(|s| s.token.clone())
    }

    /// Read any persisted token into memory. Runs once on the client.
    pub fn rehydrate(&self) {
        let stored = self.services.storage.load();
        let found = stored.is_some();
        self.state.update(|s| s.rehydrate(stored));
        leptos::logging::log!("session rehydrated (token present: {found})");
    }

    /// Exchange credentials for a token.
    ///
    /// # Errors
    ///
    /// Returns the API error after notifying, so the caller can reset its own
    /// loading indicator. The session is left as it was before the attempt.
    pub async fn login(&self, credentials: Credentials) -> Result<(), ApiError> {
        self.state.update(SessionState::begin_login);
        match self.services.api.login(&credentials).await {
            Ok(token) => {
                self.services.storage.save(&token);
                self.state.update(|s| s.complete_login(token));
                self.services.notifier.success(LOGIN_SUCCESS_MESSAGE);
                leptos::logging::log!("login succeeded for {}", credentials.email);
                Ok(())
            }
            Err(err) => {
                self.state.update(SessionState::fail_login);
                self.services.notifier.error(LOGIN_FAILURE_MESSAGE);
                leptos::logging::warn!("login failed for {}: {err}", credentials.email);
                Err(err)
            }
        }
    }

    /// Drop the session from storage and memory, then head to `/login`.
    pub fn logout(&self) {
        self.services.storage.clear();
        self.state.update(SessionState::clear);
        self.services.notifier.success(LOGOUT_MESSAGE);
        leptos::logging::log!("logged out");
    }
}
