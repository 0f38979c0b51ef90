//! Injected capabilities shared by the stores.
//!
//! DESIGN
//! ======
//! Stores receive the remote API, durable token storage, and the notifier as
//! trait objects so the browser wiring in `app` and the fakes in tests go
//! through the same code paths.

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::net::api::{HttpUserApi, UserApi};
use crate::util::notify::Notifier;
use crate::util::storage::{LocalTokenStore, TokenStore};

#[derive(Clone)]
pub struct Services {
    pub api: Arc<dyn UserApi>,
    pub storage: Arc<dyn TokenStore>,
    pub notifier: Arc<dyn Notifier>,
}

impl Services {
    /// Browser wiring: `fetch` against the configured API and `localStorage`.
    pub fn browser(config: &ClientConfig, notifier: Arc<dyn Notifier>) -> Self {
        Self { api: Arc::new(HttpUserApi::new(config)), storage: Arc::new(LocalTokenStore), notifier }
    }
}
