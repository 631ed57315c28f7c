use super::*;
use crate::theme::{MOON_ICON, SUN_ICON};
use crate::util::document::MemorySurface;
use crate::util::storage::MemoryStore;

const KEY: &str = "theme";
const ATTR: &str = "data-theme";

fn controller(store: &MemoryStore, surface: &MemorySurface) -> ThemeController<MemoryStore, MemorySurface> {
    ThemeController::new(ThemeConfig::default(), store.clone(), surface.clone())
}

/// Store whose every call fails, like a sandboxed iframe.
struct BrokenStore;

impl PreferenceStore for BrokenStore {
    fn read(&self, _key: &str) -> Result<Option<String>, ThemeError> {
        Err(ThemeError::StorageUnavailable)
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), ThemeError> {
        Err(ThemeError::Storage("QuotaExceededError".to_owned()))
    }
}

/// Surface whose every call fails.
struct BrokenSurface;

impl ThemeSurface for BrokenSurface {
    fn attribute(&self, _name: &str) -> Result<Option<String>, ThemeError> {
        Err(ThemeError::DocumentUnavailable)
    }

    fn set_attribute(&self, _name: &str, _value: &str) -> Result<(), ThemeError> {
        Err(ThemeError::Dom("NotAllowed".to_owned()))
    }

    fn set_control_label(&self, _id: &str, _label: &str) -> Result<bool, ThemeError> {
        Err(ThemeError::DocumentUnavailable)
    }
}

// =============================================================
// stored_preference
// =============================================================

#[test]
fn stored_preference_absent_is_light() {
    let ctl = controller(&MemoryStore::new(), &MemorySurface::new());
    assert_eq!(ctl.stored_preference(), Theme::Light);
}

#[test]
fn stored_preference_dark_on_exact_match() {
    let ctl = controller(&MemoryStore::with_entry(KEY, "dark"), &MemorySurface::new());
    assert_eq!(ctl.stored_preference(), Theme::Dark);
}

#[test]
fn stored_preference_anything_else_is_light() {
    for raw in ["light", "Dark", "dark\n", "", "0", "{\"theme\":\"dark\"}"] {
        let ctl = controller(&MemoryStore::with_entry(KEY, raw), &MemorySurface::new());
        assert_eq!(ctl.stored_preference(), Theme::Light, "stored {raw:?}");
    }
}

#[test]
fn stored_preference_uses_configured_key() {
    let store = MemoryStore::with_entry("planner_theme", "dark");
    let config = ThemeConfig { storage_key: "planner_theme".to_owned(), ..ThemeConfig::default() };
    let ctl = ThemeController::new(config, store, MemorySurface::new());
    assert_eq!(ctl.stored_preference(), Theme::Dark);
}

#[test]
fn stored_preference_failed_read_is_light() {
    let ctl = ThemeController::new(ThemeConfig::default(), BrokenStore, MemorySurface::new());
    assert_eq!(ctl.stored_preference(), Theme::Light);
}

// =============================================================
// apply
// =============================================================

#[test]
fn apply_dark_sets_attribute_and_sun_label() {
    let surface = MemorySurface::with_control();
    controller(&MemoryStore::new(), &surface).apply(Theme::Dark);
    assert_eq!(surface.attribute_value(ATTR).as_deref(), Some("dark"));
    assert_eq!(surface.control_label().as_deref(), Some(SUN_ICON));
}

#[test]
fn apply_light_sets_attribute_and_moon_label() {
    let surface = MemorySurface::with_control();
    controller(&MemoryStore::new(), &surface).apply(Theme::Light);
    assert_eq!(surface.attribute_value(ATTR).as_deref(), Some("light"));
    assert_eq!(surface.control_label().as_deref(), Some(MOON_ICON));
}

#[test]
fn apply_without_control_still_sets_attribute() {
    let surface = MemorySurface::new();
    controller(&MemoryStore::new(), &surface).apply(Theme::Dark);
    assert_eq!(surface.attribute_value(ATTR).as_deref(), Some("dark"));
    assert_eq!(surface.control_label(), None);
}

#[test]
fn apply_does_not_touch_storage() {
    let store = MemoryStore::new();
    controller(&store, &MemorySurface::with_control()).apply(Theme::Dark);
    assert!(store.is_empty());
}

#[test]
fn apply_on_broken_surface_is_silent() {
    let ctl = ThemeController::new(ThemeConfig::default(), MemoryStore::new(), BrokenSurface);
    ctl.apply(Theme::Dark);
    assert_eq!(ctl.current(), Theme::Light);
}

// =============================================================
// toggle
// =============================================================

#[test]
fn toggle_from_light_persists_and_applies_dark() {
    let store = MemoryStore::new();
    let surface = MemorySurface::with_control().with_attribute(ATTR, "light");
    let next = controller(&store, &surface).toggle();
    assert_eq!(next, Theme::Dark);
    assert_eq!(store.get(KEY).as_deref(), Some("dark"));
    assert_eq!(surface.attribute_value(ATTR).as_deref(), Some("dark"));
    assert_eq!(surface.control_label().as_deref(), Some(SUN_ICON));
}

#[test]
fn toggle_with_unset_attribute_treats_page_as_light() {
    let store = MemoryStore::new();
    let surface = MemorySurface::new();
    assert_eq!(controller(&store, &surface).toggle(), Theme::Dark);
    assert_eq!(store.get(KEY).as_deref(), Some("dark"));
}

#[test]
fn toggle_reads_document_not_storage() {
    let store = MemoryStore::with_entry(KEY, "dark");
    let surface = MemorySurface::new().with_attribute(ATTR, "light");
    assert_eq!(controller(&store, &surface).toggle(), Theme::Dark);
}

#[test]
fn toggle_unknown_attribute_goes_light() {
    let store = MemoryStore::new();
    let surface = MemorySurface::new().with_attribute(ATTR, "sepia");
    assert_eq!(controller(&store, &surface).toggle(), Theme::Light);
    assert_eq!(store.get(KEY).as_deref(), Some("light"));
}

#[test]
fn toggle_twice_restores_attribute() {
    for start in ["light", "dark"] {
        let store = MemoryStore::new();
        let surface = MemorySurface::with_control().with_attribute(ATTR, start);
        let ctl = controller(&store, &surface);
        ctl.toggle();
        ctl.toggle();
        assert_eq!(surface.attribute_value(ATTR).as_deref(), Some(start));
        assert_eq!(store.get(KEY).as_deref(), Some(start));
    }
}

#[test]
fn toggle_with_failed_write_still_applies() {
    let surface = MemorySurface::with_control().with_attribute(ATTR, "light");
    let ctl = ThemeController::new(ThemeConfig::default(), BrokenStore, surface.clone());
    assert_eq!(ctl.toggle(), Theme::Dark);
    assert_eq!(surface.attribute_value(ATTR).as_deref(), Some("dark"));
    assert_eq!(surface.control_label().as_deref(), Some(SUN_ICON));
}

// =============================================================
// initialize (page load scenarios)
// =============================================================

#[test]
fn initialize_without_stored_value_applies_light() {
    let surface = MemorySurface::with_control();
    let theme = controller(&MemoryStore::new(), &surface).initialize();
    assert_eq!(theme, Theme::Light);
    assert_eq!(surface.attribute_value(ATTR).as_deref(), Some("light"));
    assert_eq!(surface.control_label().as_deref(), Some(MOON_ICON));
}

#[test]
fn initialize_with_stored_dark_applies_dark() {
    let surface = MemorySurface::with_control();
    let theme = controller(&MemoryStore::with_entry(KEY, "dark"), &surface).initialize();
    assert_eq!(theme, Theme::Dark);
    assert_eq!(surface.attribute_value(ATTR).as_deref(), Some("dark"));
    assert_eq!(surface.control_label().as_deref(), Some(SUN_ICON));
}

#[test]
fn initialize_never_writes_storage() {
    let store = MemoryStore::new();
    controller(&store, &MemorySurface::with_control()).initialize();
    assert!(store.is_empty());
}

#[test]
fn initialize_then_click_scenario() {
    let store = MemoryStore::new();
    let surface = MemorySurface::with_control();
    let ctl = controller(&store, &surface);
    ctl.initialize();
    ctl.toggle();
    assert_eq!(store.get(KEY).as_deref(), Some("dark"));
    assert_eq!(surface.attribute_value(ATTR).as_deref(), Some("dark"));
    assert_eq!(surface.control_label().as_deref(), Some(SUN_ICON));
}
