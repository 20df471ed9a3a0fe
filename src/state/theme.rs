//! Light/dark theme preference.
//!
//! Resolution order at startup: stored preference, then the system
//! `prefers-color-scheme`, then [`Theme::Light`]. Toggling persists
//! [`Theme::as_str`] under the same key it was read from.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::util::storage::PreferenceStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Stored and applied representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Only the exact strings written by
    /// [`Theme::as_str`] are recognised.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn resolve(stored: Option<&str>, system_prefers_dark: bool) -> Self {
        if let Some(theme) = stored.and_then(Self::parse) {
            return theme;
        }
        if system_prefers_dark { Self::Dark } else { Self::Light }
    }
}

/// Active theme bound to the store it persists into.
#[derive(Debug)]
pub struct ThemeState<S> {
    store: S,
    key: String,
    current: Theme,
}

impl<S: PreferenceStore> ThemeState<S> {
    /// Resolve the startup theme from `store`.
    pub fn load(store: S, key: impl Into<String>, system_prefers_dark: bool) -> Self {
        let key = key.into();
        let stored = store.load(&key);
        if let Some(raw) = stored.as_deref() {
            if Theme::parse(raw).is_none() {
                log::warn!("ignoring unrecognised stored theme {raw:?}");
            }
        }
        let current = Theme::resolve(stored.as_deref(), system_prefers_dark);
        Self { store, key, current }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme and persist it. Returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.store.save(&self.key, self.current.as_str());
        self.current
    }

    /// Give back the store (e.g. to simulate a reload in tests).
    pub fn into_store(self) -> S {
        self.store
    }
}
