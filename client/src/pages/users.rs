//! User directory page: one page of remote users with search, edit and delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered only inside `RequireSession`. The page builds a `DirectoryStore`
//! over its own `DirectoryState` signal, sharing the session's services so
//! every request carries the current token.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;

use crate::components::edit_user_dialog::EditUserDialog;
use crate::components::pagination::Pagination;
use crate::components::user_card::UserCard;
use crate::net::types::User;
use crate::state::directory::{DirectoryState, DirectoryStore};
use crate::state::session::SessionStore;
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Text shown in place of the grid when nothing is visible.
fn empty_message(state: &DirectoryState) -> Option<&'static str> {
    if state.loading || !state.visible_users().is_empty() {
        return None;
    }
    if state.search.is_empty() { Some("No users found.") } else { Some("No users match your search.") }
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let ui = expect_context::<RwSignal<UiState>>();
    let directory = RwSignal::new(DirectoryState::default());
    let store = DirectoryStore::new(directory, session.state(), session.services().clone());
    let saving = RwSignal::new(false);

    // Effects only run in the browser, so the first fetch happens after hydration.
    Effect::new({
        let store = store.clone();
        move |prev: Option<()>| {
            if prev.is_none() {
                let store = store.clone();
                leptos::task::spawn_local(async move { store.load_page(1).await });
            }
        }
    });

    let on_select = Callback::new({
        let store = store.clone();
        move |page: u32| {
            let store = store.clone();
            leptos::task::spawn_local(async move { store.change_page(page).await });
        }
    });

    let on_edit = Callback::new({
        let store = store.clone();
        move |user: User| store.begin_edit(&user)
    });

    let on_delete = Callback::new({
        let store = store.clone();
        move |id: u64| {
            let store = store.clone();
            leptos::task::spawn_local(async move {
                store.delete_user(id).await;
            });
        }
    });

    let on_save = Callback::new({
        let store = store.clone();
        move |draft: User| {
            saving.set(true);
            let store = store.clone();
            leptos::task::spawn_local(async move {
                store.commit_edit(draft).await;
                saving.set(false);
            });
        }
    });

    let on_cancel = Callback::new({
        let store = store.clone();
        move |()| store.cancel_edit()
    });

    let on_search = {
        let store = store.clone();
        move |ev: leptos::ev::Event| store.search(&event_target_value(&ev))
    };

    let on_logout = move |_: leptos::ev::MouseEvent| session.logout();
    let on_theme = move |_: leptos::ev::MouseEvent| ui.update(|u| u.dark_mode = dark_mode::toggle(u.dark_mode));

    view! {
        <div class="users-page">
            <header class="users-header">
                <h1 class="users-header__title">"User Management"</h1>
                <div class="users-header__actions">
                    <button class="btn btn--ghost" on:click=on_theme>
                        {move || if ui.get().dark_mode { "Light mode" } else { "Dark mode" }}
                    </button>
                    <button class="btn btn--danger" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </header>

            <div class="users-toolbar">
                <input
                    class="users-search"
                    type="search"
                    placeholder="Search users..."
                    prop:value=move || directory.with(|d| d.search.clone())
                    on:input=on_search
                />
            </div>

            <Show when=move || directory.with(|d| d.loading)>
                <div class="spinner" role="progressbar" aria-label="Loading users"></div>
            </Show>

            {move || directory.with(empty_message).map(|text| view! { <p class="users-empty">{text}</p> })}

            <div class="users-grid">
                {move || {
                    directory
                        .with(DirectoryState::visible_users)
                        .into_iter()
                        .map(|user| view! { <UserCard user=user on_edit=on_edit on_delete=on_delete /> })
                        .collect::<Vec<_>>()
                }}
            </div>

            <Pagination buttons=Signal::derive(move || directory.with(DirectoryState::page_buttons)) on_select=on_select />

            <Show when=move || directory.with(|d| d.editing.is_some())>
                <EditUserDialog directory=directory saving=saving on_save=on_save on_cancel=on_cancel />
            </Show>
        </div>
    }
}
