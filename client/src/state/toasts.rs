//! Toast stack state and the `Notifier` that feeds it.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ToastNotifier` is the production `Notifier`: every message is logged and
//! pushed onto a signal rendered by the `Toaster` component. In the browser
//! each toast removes itself after the configured lifetime.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

use leptos::prelude::*;

use crate::util::notify::{Notifier, NotifyKind};

/// Oldest toasts are dropped beyond this many.
pub const MAX_VISIBLE: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: NotifyKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast and return its id.
    pub fn push(&mut self, kind: NotifyKind, message: &str) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, kind, message: message.to_owned() });
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}

#[derive(Clone, Copy)]
pub struct ToastNotifier {
    toasts: RwSignal<ToastState>,
    lifetime_ms: u32,
}

impl ToastNotifier {
    pub fn new(toasts: RwSignal<ToastState>, lifetime_ms: u32) -> Self {
        Self { toasts, lifetime_ms }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, kind: NotifyKind, message: &str) {
        match kind {
            NotifyKind::Success => leptos::logging::log!("notify: {message}"),
            NotifyKind::Error => leptos::logging::warn!("notify: {message}"),
        }
        let Some(id) = self.toasts.try_update(|t| t.push(kind, message)) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let toasts = self.toasts;
            let lifetime_ms = self.lifetime_ms;
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(lifetime_ms).await;
                toasts.try_update(|t| t.dismiss(id));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, self.lifetime_ms);
        }
    }
}
