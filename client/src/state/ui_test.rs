use super::*;

#[test]
fn ui_state_default_dark_mode_off() {
    assert!(!UiState::default().dark_mode);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn from_preference_is_light_outside_browser() {
    assert_eq!(UiState::from_preference(), UiState::default());
}
