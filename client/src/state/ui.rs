//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps presentation preferences out of session and directory state so the
//! chrome can evolve independently of remote data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
}

impl UiState {
    /// Seed from the stored or system preference.
    pub fn from_preference() -> Self {
        Self { dark_mode: crate::util::dark_mode::read_preference() }
    }
}
