//! # planner-theme
//!
//! Light/dark theme preference for the study planner pages, compiled to
//! WASM. Reads the stored choice from `localStorage`, sets `data-theme` on
//! the `<html>` element, and keeps the `#theme-toggle` button's icon in step.
//!
//! ARCHITECTURE
//! ============
//! `theme` holds the pure rules, `controller` drives them through the
//! `PreferenceStore`/`ThemeSurface` seams, and `util` implements those seams
//! for the browser and for memory. `start` boots the controller on
//! server-rendered pages; `components::theme_toggle` is the Leptos variant.

pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod state;
pub mod theme;
pub mod util;

#[cfg(feature = "hydrate")]
mod boot;

pub use config::ThemeConfig;
pub use controller::{PreferenceStore, ThemeController, ThemeSurface};
pub use error::ThemeError;
pub use theme::Theme;

use util::document::DocumentSurface;
use util::storage::LocalStorage;

/// Controller bound to `localStorage` and the live document.
pub type BrowserController = ThemeController<LocalStorage, DocumentSurface>;

/// Build a controller over the browser environment.
pub fn browser_controller(config: ThemeConfig) -> BrowserController {
    ThemeController::new(config, LocalStorage, DocumentSurface)
}

/// Apply the stored theme once the DOM is ready and bind the toggle control.
///
/// Does nothing outside hydrate builds.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn boot(config: ThemeConfig) {
    #[cfg(feature = "hydrate")]
    boot::run(browser_controller(config));
}

/// [`boot`] with a JSON config; omitted fields keep their defaults.
///
/// # Errors
///
/// Returns [`ThemeError::Config`] if `raw` is not a valid config object.
pub fn boot_with_config(raw: &str) -> Result<(), ThemeError> {
    let config = ThemeConfig::from_json(raw)?;
    boot(config);
    Ok(())
}

/// WASM entry point: install panic/console hooks and boot with defaults.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let config = ThemeConfig::default();
    if let Err(e) = console_log::init_with_level(config.log_level()) {
        // Host page already installed a logger; keep using it.
        log::debug!("theme: console logger not installed: {e}");
    }
    boot(config);
}
