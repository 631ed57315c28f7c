//! Theme preference controller.
//!
//! ARCHITECTURE
//! ============
//! The controller owns no browser handles. It talks to two seams:
//! [`PreferenceStore`] for the persisted choice and [`ThemeSurface`] for the
//! document root attribute and the toggle label. `util` provides browser and
//! in-memory implementations of both.
//!
//! Adapter failures never escape: reads fall back to light, writes are
//! logged and skipped.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::ThemeConfig;
use crate::error::ThemeError;
use crate::theme::Theme;

/// Persistent key-value storage for the preference.
pub trait PreferenceStore {
    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be reached or throws.
    fn read(&self, key: &str) -> Result<Option<String>, ThemeError>;

    /// Overwrite the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be reached or throws.
    fn write(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// The page the theme is applied to.
pub trait ThemeSurface {
    /// Current value of the root element attribute `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not reachable.
    fn attribute(&self, name: &str) -> Result<Option<String>, ThemeError>;

    /// Set the root element attribute `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not reachable or the call throws.
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError>;

    /// Replace the visible label of the control with id `id`.
    ///
    /// Returns `Ok(false)` when no such control is on the page.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not reachable.
    fn set_control_label(&self, id: &str, label: &str) -> Result<bool, ThemeError>;
}

/// Reads, applies, and toggles the theme preference.
#[derive(Clone, Debug)]
pub struct ThemeController<S, D> {
    config: ThemeConfig,
    store: S,
    surface: D,
}

impl<S: PreferenceStore, D: ThemeSurface> ThemeController<S, D> {
    pub fn new(config: ThemeConfig, store: S, surface: D) -> Self {
        Self { config, store, surface }
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// Persisted preference; anything but an exact `"dark"` is light.
    pub fn stored_preference(&self) -> Theme {
        match self.store.read(&self.config.storage_key) {
            Ok(value) => Theme::from_stored(value.as_deref()),
            Err(e) => {
                log::warn!("theme: reading preference failed, using light: {e}");
                Theme::Light
            }
        }
    }

    /// Theme currently on the document root.
    pub fn current(&self) -> Theme {
        match self.surface.attribute(&self.config.attribute) {
            Ok(value) => Theme::from_attribute(value.as_deref()),
            Err(e) => {
                log::warn!("theme: reading document attribute failed, assuming light: {e}");
                Theme::Light
            }
        }
    }

    /// Set the root attribute and, when the control exists, its label.
    pub fn apply(&self, theme: Theme) {
        if let Err(e) = self.surface.set_attribute(&self.config.attribute, theme.as_str()) {
            log::warn!("theme: setting {} failed: {e}", self.config.attribute);
        }
        match self.surface.set_control_label(&self.config.control_id, theme.icon()) {
            Ok(true) => {}
            Ok(false) => log::debug!("theme: no #{} control on page", self.config.control_id),
            Err(e) => log::warn!("theme: updating toggle label failed: {e}"),
        }
        log::debug!("theme: applied {theme}");
    }

    /// Flip the on-screen theme, persist it, and re-apply it.
    pub fn toggle(&self) -> Theme {
        let next = self.current().toggled();
        if let Err(e) = self.store.write(&self.config.storage_key, next.as_str()) {
            log::warn!("theme: persisting {next} failed: {e}");
        }
        self.apply(next);
        next
    }

    /// Page-ready step: apply the stored preference and return it.
    pub fn initialize(&self) -> Theme {
        let theme = self.stored_preference();
        self.apply(theme);
        theme
    }
}
