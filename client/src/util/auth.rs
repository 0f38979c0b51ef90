//! Route guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes apply identical redirect rules, all derived from the one
//! session signal. Nothing here holds state; decisions are recomputed on
//! every navigation and every session change.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{AppRoute, SessionState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Storage has not been read yet; render a placeholder.
    Pending,
    Render,
    Redirect,
}

/// Render protected content iff a token is present.
pub fn guard_decision(state: &SessionState) -> GuardDecision {
    if !state.rehydrated {
        GuardDecision::Pending
    } else if state.is_authenticated() {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect
    }
}

pub fn should_redirect_unauth(state: &SessionState) -> bool {
    guard_decision(state) == GuardDecision::Redirect
}

fn replace() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Redirect to `/login` whenever the session is known to be empty.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if session.with(should_redirect_unauth) {
            navigate(AppRoute::Login.path(), replace());
        }
    });
}

/// Perform navigation requested by login/logout, consuming the request.
pub fn install_session_navigation<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if session.with(|s| s.pending_route.is_none()) {
            return;
        }
        if let Some(route) = session.try_update(SessionState::take_pending_route).flatten() {
            navigate(route.path(), NavigateOptions::default());
        }
    });
}
