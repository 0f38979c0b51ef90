//! Browser `localStorage` helpers and the durable token store.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize hydrate-only read/write behavior so the session
//! store and UI preferences do not repeat web-sys glue. Outside the browser
//! every read is empty and every write is a no-op.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// `localStorage` key holding the bearer token. Absence means logged out.
pub const TOKEN_KEY: &str = "token";

/// Durable home of the session token.
///
/// Access is synchronous; the browser serializes it on the event loop.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// `TokenStore` backed by `localStorage[TOKEN_KEY]`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTokenStore;

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        load_raw(TOKEN_KEY).filter(|token| !token.is_empty())
    }

    fn save(&self, token: &str) {
        save_raw(TOKEN_KEY, token);
    }

    fn clear(&self) {
        remove(TOKEN_KEY);
    }
}

/// Read the raw string stored under `key`.
pub fn load_raw(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Write `value` under `key`, ignoring quota and privacy-mode failures.
pub fn save_raw(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            leptos::logging::warn!("localStorage write failed for key {key}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Remove `key` from storage.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
