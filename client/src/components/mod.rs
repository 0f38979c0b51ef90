//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render directory chrome and interaction surfaces while
//! reading/writing shared state from Leptos context providers or props.

pub mod edit_user_dialog;
pub mod pagination;
pub mod require_session;
pub mod toaster;
pub mod user_card;
