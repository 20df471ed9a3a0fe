use super::*;

const HIDING_EVENTS: [NavEvent; 4] =
    [NavEvent::CloseClicked, NavEvent::LinkClicked, NavEvent::OutsideClicked, NavEvent::EscapePressed];

#[test]
fn nav_starts_collapsed() {
    let state = NavState::default();
    assert!(!state.expanded());
    assert_eq!(state.aria_expanded(), "false");
}

#[test]
fn toggle_flips_and_syncs_aria() {
    let mut state = NavState::default();
    assert!(state.apply(NavEvent::ToggleClicked));
    assert!(state.expanded());
    assert_eq!(state.aria_expanded(), "true");
    assert!(state.apply(NavEvent::ToggleClicked));
    assert_eq!(state.aria_expanded(), "false");
}

#[test]
fn link_click_always_hides_regardless_of_prior_state() {
    for start_expanded in [false, true] {
        let mut state = NavState::default();
        if start_expanded {
            state.apply(NavEvent::ToggleClicked);
        }
        state.apply(NavEvent::LinkClicked);
        assert!(!state.expanded());
        assert_eq!(state.aria_expanded(), "false");
    }
}

#[test]
fn every_hiding_event_collapses_an_open_panel() {
    for event in HIDING_EVENTS {
        let mut state = NavState::default();
        state.apply(NavEvent::ToggleClicked);
        assert!(state.apply(event), "{event:?} should report a change");
        assert!(!state.expanded());
    }
}

#[test]
fn hiding_events_on_closed_panel_report_no_change() {
    for event in HIDING_EVENTS {
        let mut state = NavState::default();
        assert!(!state.apply(event));
    }
}
