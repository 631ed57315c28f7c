//! Theme value and the pure rules around it.
//!
//! DESIGN
//! ======
//! Everything here is side-effect free: parsing what storage or the document
//! hands back, picking the next theme, and choosing the toggle label. The
//! controller feeds these rules with whatever its environment adapters read.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// Label shown while the page is light; clicking switches to dark.
pub const MOON_ICON: &str = "🌙";
/// Label shown while the page is dark; clicking switches to light.
pub const SUN_ICON: &str = "☀️";

/// One of the two supported visual modes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Wire value written to storage and to the document attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Interpret a persisted value. Only an exact `"dark"` selects dark.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// Interpret the document attribute as the theme currently on screen.
    ///
    /// Unset or empty counts as light. Any other value that is not exactly
    /// `"light"` toggles to light, so it is treated as dark.
    #[must_use]
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            None | Some("" | "light") => Self::Light,
            Some(_) => Self::Dark,
        }
    }

    /// The opposite theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Toggle control label for this theme.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => MOON_ICON,
            Self::Dark => SUN_ICON,
        }
    }

    /// Tooltip describing what a click on the toggle will do.
    #[must_use]
    pub fn toggle_title(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }

    /// Whether this is the dark theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeError::InvalidTheme(other.to_owned())),
        }
    }
}
