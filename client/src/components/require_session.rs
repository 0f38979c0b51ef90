//! Route guard wrapper for protected pages.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::util::auth::{GuardDecision, guard_decision, install_unauth_redirect};

fn placeholder_text(decision: GuardDecision) -> &'static str {
    match decision {
        GuardDecision::Pending => "Loading...",
        GuardDecision::Render | GuardDecision::Redirect => "Redirecting to login...",
    }
}

/// Renders `children` only while a session token is present.
///
/// Without a token it replaces the current history entry with `/login`.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_unauth_redirect(session, use_navigate());

    let decision = move || session.with(guard_decision);

    view! {
        <Show
            when=move || decision() == GuardDecision::Render
            fallback=move || {
                view! {
                    <div class="guard-placeholder">
                        <p>{move || placeholder_text(decision())}</p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
