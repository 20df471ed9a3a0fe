//! Mobile navigation panel state.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Interactions that can change the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEvent {
    ToggleClicked,
    CloseClicked,
    LinkClicked,
    /// A click outside both the panel and its toggle.
    OutsideClicked,
    EscapePressed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    expanded: bool,
}

impl NavState {
    #[must_use]
    pub fn expanded(self) -> bool {
        self.expanded
    }

    /// Value for the toggle's `aria-expanded` attribute.
    #[must_use]
    pub fn aria_expanded(self) -> &'static str {
        if self.expanded { "true" } else { "false" }
    }

    /// Apply `event`; returns whether visibility changed.
    pub fn apply(&mut self, event: NavEvent) -> bool {
        let next = match event {
            NavEvent::ToggleClicked => !self.expanded,
            NavEvent::CloseClicked | NavEvent::LinkClicked | NavEvent::OutsideClicked | NavEvent::EscapePressed => {
                false
            }
        };
        let changed = next != self.expanded;
        self.expanded = next;
        changed
    }
}
