//! Local UI chrome state for the theme toggle.
//!
//! DESIGN
//! ======
//! Held in an `RwSignal` so every toggle on a page renders the same label.
//! The document attribute and storage are side effects of changing it.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::theme::Theme;

/// UI state for the theme toggle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
}

impl UiState {
    pub fn with_theme(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }
}
