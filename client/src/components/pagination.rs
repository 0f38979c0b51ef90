//! Page selector for the directory.
//!
//! One button per page with no windowing; fine while the remote directory
//! stays a handful of pages.

use leptos::prelude::*;

use crate::state::directory::PageButton;

#[component]
pub fn Pagination(#[prop(into)] buttons: Signal<Vec<PageButton>>, on_select: Callback<u32>) -> impl IntoView {
    view! {
        <nav class="pagination" aria-label="Pages">
            {move || {
                buttons
                    .get()
                    .into_iter()
                    .map(|button| {
                        let number = button.number;
                        view! {
                            <button
                                class="pagination__page"
                                class:pagination__page--active=button.active
                                aria-current=if button.active { Some("page") } else { None }
                                on:click=move |_| on_select.run(number)
                            >
                                {number}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </nav>
    }
}
