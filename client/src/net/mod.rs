//! Networking modules for the remote user-directory API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and the error taxonomy, `types` defines the wire
//! schema shared with tests and state modules.

pub mod api;
pub mod types;
