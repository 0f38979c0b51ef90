//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `directory`, `toasts`, `ui`) so
//! individual components depend on small focused models. Each module keeps
//! its transitions on plain structs; the stores add signals and remote calls.

pub mod directory;
pub mod session;
pub mod toasts;
pub mod ui;
