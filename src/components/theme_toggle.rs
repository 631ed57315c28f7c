//! Toolbar button that flips between light and dark themes.
//!
//! SYSTEM CONTEXT
//! ==============
//! The button label is owned by Leptos, so it deliberately has no
//! `theme-toggle` id: the controller's label write finds no control and
//! only the root attribute and storage are touched.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::prelude::*;

use crate::config::ThemeConfig;
use crate::state::ui::UiState;

/// Create the theme signal from the stored preference and provide it as context.
pub fn provide_theme_context() -> RwSignal<UiState> {
    let controller = crate::browser_controller(ThemeConfig::default());
    let ui = RwSignal::new(UiState::with_theme(controller.stored_preference()));
    provide_context(ui);
    ui
}

/// Theme signal from context, providing one if the page has not.
pub fn use_theme_signal() -> RwSignal<UiState> {
    use_context::<RwSignal<UiState>>().unwrap_or_else(provide_theme_context)
}

/// Theme toggle button.
///
/// Uses the `RwSignal<UiState>` from context, providing one if the page has not.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = use_theme_signal();
    let controller = crate::browser_controller(ThemeConfig::default());

    {
        let controller = controller.clone();
        Effect::new(move || controller.apply(ui.get().theme));
    }

    view! {
        <button
            class="btn toolbar__theme-toggle"
            class:toolbar__theme-toggle--dark=move || ui.get().is_dark()
            on:click=move |_| {
                let next = controller.toggle();
                ui.update(|u| u.theme = next);
            }
            title=move || ui.get().theme.toggle_title()
            aria-label=move || ui.get().theme.toggle_title()
        >
            {move || ui.get().theme.icon()}
        </button>
    }
}
