//! Modal form editing a draft copy of a user record.
//!
//! SYSTEM CONTEXT
//! ==============
//! The draft lives in `DirectoryState::editing`; keystrokes only touch the
//! draft, never the cached list. Saving hands the draft to the page, which
//! commits it remotely and closes the dialog on success.

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::directory::DirectoryState;

#[component]
pub fn EditUserDialog(
    directory: RwSignal<DirectoryState>,
    saving: RwSignal<bool>,
    on_save: Callback<User>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        if let Some(draft) = directory.with_untracked(|d| d.editing.clone()) {
            on_save.run(draft);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <div class="dialog__header">
                    <h2>"Edit User"</h2>
                    <button class="dialog__close" aria-label="Close" on:click=move |_| on_cancel.run(())>
                        "×"
                    </button>
                </div>
                <form class="dialog__form" on:submit=submit>
                    <label class="dialog__label">
                        "First Name"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || draft_field(directory, |u| u.first_name.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                directory.update(|d| d.edit_draft(|u| u.first_name = value));
                            }
                        />
                    </label>
                    <label class="dialog__label">
                        "Last Name"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || draft_field(directory, |u| u.last_name.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                directory.update(|d| d.edit_draft(|u| u.last_name = value));
                            }
                        />
                    </label>
                    <label class="dialog__label">
                        "Email"
                        <input
                            class="dialog__input"
                            type="email"
                            prop:value=move || draft_field(directory, |u| u.email.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                directory.update(|d| d.edit_draft(|u| u.email = value));
                            }
                        />
                    </label>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                            "Save Changes"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

fn draft_field(directory: RwSignal<DirectoryState>, read: impl Fn(&User) -> String) -> String {
    directory.with(|d| d.editing.as_ref().map(&read).unwrap_or_default())
}
