//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
    hooks::use_navigate,
};

use crate::components::require_session::RequireSession;
use crate::components::toaster::Toaster;
use crate::config::ClientConfig;
use crate::pages::{login::LoginPage, users::UsersPage};
use crate::services::Services;
use crate::state::session::{SessionState, SessionStore};
use crate::state::toasts::{ToastNotifier, ToastState};
use crate::state::ui::UiState;
use crate::util::auth::install_session_navigation;
use crate::util::dark_mode;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Performs navigation requested by the session store. Must sit inside `Router`.
#[component]
fn SessionNavigator() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_session_navigation(session, use_navigate());
}

/// Root application component.
///
/// Provides the session, toast, and UI contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let toasts = RwSignal::new(ToastState::default());
    let session = RwSignal::new(SessionState::default());
    let ui = RwSignal::new(UiState::default());

    let notifier = Arc::new(ToastNotifier::new(toasts, config.toast_ms));
    let store = SessionStore::new(session, Services::browser(&config, notifier));

    provide_context(toasts);
    provide_context(session);
    provide_context(ui);
    provide_context(store.clone());

    // Storage is browser-only: the server renders the pending guard state and
    // the client fills in the token and theme after hydration.
    Effect::new(move |prev: Option<()>| {
        if prev.is_none() {
            store.rehydrate();
            let preference = UiState::from_preference();
            dark_mode::apply(preference.dark_mode);
            ui.set(preference);
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/userdeck.css"/>
        <Title text="User Management"/>

        <Router>
            <SessionNavigator/>
            <Toaster/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/login"/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=StaticSegment("users")
                    view=|| view! { <RequireSession><UsersPage/></RequireSession> }
                />
            </Routes>
        </Router>
    }
}
