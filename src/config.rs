//! Names of the storage key, root attribute, and toggle element.
//!
//! SYSTEM CONTEXT
//! ==============
//! The planner templates use the defaults. Embedders with different markup
//! pass a JSON object with only the fields they override.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::ThemeError;

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_ATTRIBUTE: &str = "data-theme";
pub const DEFAULT_CONTROL_ID: &str = "theme-toggle";
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Runtime configuration for the theme controller.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// `localStorage` key holding the preference.
    pub storage_key: String,
    /// Attribute set on the document root element.
    pub attribute: String,
    /// Id of the optional toggle control.
    pub control_id: String,
    /// Console log level for hydrate builds.
    pub log_level: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            attribute: DEFAULT_ATTRIBUTE.to_owned(),
            control_id: DEFAULT_CONTROL_ID.to_owned(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl ThemeConfig {
    /// Parse a JSON object; missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Config`] if `raw` is not a valid config object.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Parsed log level, falling back to `Warn` on unknown names.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Warn)
    }
}
