//! Browser seams for the theme controller.
//!
//! `LocalStorage` persists the preference in `window.localStorage`;
//! `DocumentRoot` writes the `data-theme` attribute on `<html>`. Both look up
//! the window on each call and silently no-op when it or the storage is
//! unavailable, including on host builds without the `csr` feature.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::{PreferenceStore, Theme, ThemeController, ThemeRenderer};

/// Theme controller wired to the real page.
pub type PageTheme = ThemeController<LocalStorage, DocumentRoot>;

/// Build the page theme controller, applying the stored preference.
pub fn page_theme() -> PageTheme {
    ThemeController::load(LocalStorage, DocumentRoot)
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn save(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

impl ThemeRenderer for DocumentRoot {
    fn apply(&self, theme: Theme) {
        #[cfg(feature = "csr")]
        {
            if let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            {
                let _ = el.set_attribute("data-theme", theme.as_str());
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = theme;
        }
    }
}
