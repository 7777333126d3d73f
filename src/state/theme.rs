//! Light/dark theme preference and its controller.
//!
//! DESIGN
//! ======
//! The controller owns the in-memory theme and pushes every change through two
//! injected seams: a `PreferenceStore` (browser `localStorage` in production)
//! and a `ThemeRenderer` (the `data-theme` attribute on `<html>`). After every
//! toggle the three copies agree.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Storage slot holding the persisted theme name.
pub const STORAGE_KEY: &str = "theme";

/// The two page themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a persisted value. Unknown values yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon shown on the toggle button: the sun offers a way out of dark mode,
    /// the moon a way into it.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fas fa-moon",
            Self::Dark => "fas fa-sun",
        }
    }
}

/// Key-value persistence for the theme flag.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    /// Best effort; write failures are ignored.
    fn save(&self, key: &str, value: &str);
}

/// Applies a theme to the rendered document.
pub trait ThemeRenderer {
    fn apply(&self, theme: Theme);
}

/// Owns the current theme and keeps storage and document in sync with it.
#[derive(Clone, Debug)]
pub struct ThemeController<S, R> {
    current: Theme,
    store: S,
    renderer: R,
}

impl<S: PreferenceStore, R: ThemeRenderer> ThemeController<S, R> {
    /// Read the stored preference (default light) and apply it immediately.
    pub fn load(store: S, renderer: R) -> Self {
        let current = store
            .load(STORAGE_KEY)
            .as_deref()
            .and_then(Theme::parse)
            .unwrap_or_default();
        renderer.apply(current);
        log::debug!("theme initialized: {}", current.as_str());
        Self { current, store, renderer }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme, render it, persist it, and return the new value.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.renderer.apply(self.current);
        self.store.save(STORAGE_KEY, self.current.as_str());
        log::debug!("theme toggled: {}", self.current.as_str());
        self.current
    }
}
