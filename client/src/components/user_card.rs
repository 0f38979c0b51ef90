//! Card for one user record in the directory grid.

use leptos::prelude::*;

use crate::net::types::User;

#[component]
pub fn UserCard(user: User, on_edit: Callback<User>, on_delete: Callback<u64>) -> impl IntoView {
    let id = user.id;
    let full_name = user.full_name();
    let edit_target = user.clone();

    view! {
        <article class="user-card">
            <div class="user-card__banner"></div>
            <img class="user-card__avatar" src=user.avatar alt=full_name.clone() />
            <h3 class="user-card__name">{full_name}</h3>
            <p class="user-card__email">
                <span class="user-card__label">"Email - "</span>
                {user.email}
            </p>
            <div class="user-card__actions">
                <button class="btn btn--edit" on:click=move |_| on_edit.run(edit_target.clone())>
                    "Edit"
                </button>
                <button class="btn btn--danger" on:click=move |_| on_delete.run(id)>
                    "Delete"
                </button>
            </div>
        </article>
    }
}
