use crate::core::menu::{MenuState, ACTIVE_CLASS};

#[test]
fn test_default_state_is_closed() {
    assert_eq!(MenuState::default(), MenuState::Closed);
    assert!(!MenuState::default().is_open());
}

#[test]
fn test_toggle_flips_state() {
    assert_eq!(MenuState::Closed.toggled(), MenuState::Open);
    assert_eq!(MenuState::Open.toggled(), MenuState::Closed);
}

#[test]
fn test_even_number_of_toggles_restores_state() {
    // Clicking the toggle an even number of times must return the
    // panel and icon to their original values
    let mut state = MenuState::Closed;
    for _ in 0..6 {
        state = state.toggled();
    }

    assert_eq!(state, MenuState::Closed, "6 toggles should restore Closed");
    assert_eq!(state.icon_name(), MenuState::Closed.icon_name());
}

#[test]
fn test_odd_number_of_toggles_opens() {
    let mut state = MenuState::Closed;
    for _ in 0..3 {
        state = state.toggled();
    }

    assert_eq!(state, MenuState::Open, "3 toggles should leave the menu open");
}

#[test]
fn test_icon_names_are_mutually_exclusive() {
    let closed = MenuState::Closed.icon_name();
    let open = MenuState::Open.icon_name();

    assert_ne!(closed, open, "Open and closed icons must differ");
    assert_eq!(closed, "open-menu-symbolic");
    assert_eq!(open, "window-close-symbolic");
}

#[test]
fn test_active_class_name() {
    // The links panel carries this class exactly while open
    assert_eq!(ACTIVE_CLASS, "active");
}
