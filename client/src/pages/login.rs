//! Login page: email + password exchanged for a bearer token.
//!
//! The page only tracks its form and loading flag. Success and failure
//! messages come from the session store's notifier, and navigation to the
//! directory is requested by the store.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::api::ApiError;
use crate::net::types::Credentials;
use crate::state::session::SessionStore;

/// Trim the email and require both fields.
fn validate_credentials(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub credentials: Credentials,
    pub loading: bool,
}

impl LoginForm {
    /// Start a submission, returning the credentials to send.
    ///
    /// Returns `None` while a request is already in flight or a field is empty.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.loading {
            return None;
        }
        let credentials = validate_credentials(&self.credentials.email, &self.credentials.password).ok()?;
        self.loading = true;
        Some(credentials)
    }

    pub fn finish_submit(&mut self) {
        self.loading = false;
    }
}

/// Run one login attempt from `form`, clearing its loading flag afterwards.
///
/// # Errors
///
/// Propagates the session store's login error.
pub async fn submit_login(session: &SessionStore, form: RwSignal<LoginForm>) -> Result<(), ApiError> {
    let Some(credentials) = form.try_update(LoginForm::begin_submit).flatten() else {
        return Ok(());
    };
    let result = session.login(credentials).await;
    form.update(LoginForm::finish_submit);
    result
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let form = RwSignal::new(LoginForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let session = session.clone();
        leptos::task::spawn_local(async move {
            // The notifier already surfaced the failure; the form just resets.
            let _ = submit_login(&session, form).await;
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1 class="login-card__title">"Welcome back"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        required
                        placeholder="User name / Email"
                        autocomplete="username"
                        prop:value=move || form.with(|f| f.credentials.email.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.credentials.email = value);
                        }
                    />
                    <input
                        class="login-input"
                        type="password"
                        required
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || form.with(|f| f.credentials.password.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.credentials.password = value);
                        }
                    />
                    <button class="login-button" type="submit" disabled=move || form.with(|f| f.loading)>
                        <span>{move || if form.with(|f| f.loading) { "SIGNING IN..." } else { "LOGIN NOW" }}</span>
                        <span class="login-button__arrow">"→"</span>
                    </button>
                </form>
            </div>
        </div>
    }
}
