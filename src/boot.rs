//! Page-ready and click wiring for server-rendered planner pages.
//!
//! Mirrors a plain `<script>` include: wait for `DOMContentLoaded` (or run
//! at once if it already fired), apply the stored theme, then bind the
//! toggle control if the page has one.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::BrowserController;
use crate::util::js_error_message;

pub(crate) fn run(controller: BrowserController) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("theme: no document, skipping boot");
        return;
    };

    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(move || on_ready(controller));
        if let Err(e) =
            document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        {
            log::warn!("theme: DOMContentLoaded listener failed: {}", js_error_message(&e));
        }
    } else {
        on_ready(controller);
    }
}

fn on_ready(controller: BrowserController) {
    let theme = controller.initialize();
    log::debug!("theme: initialized to {theme}");

    let control_id = controller.config().control_id.clone();
    let Some(control) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(&control_id))
    else {
        log::debug!("theme: no #{control_id} control, click not bound");
        return;
    };

    let on_click = Closure::<dyn FnMut()>::new(move || {
        controller.toggle();
    });
    match control.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()) {
        // Listener lives for the page.
        Ok(()) => on_click.forget(),
        Err(e) => log::warn!("theme: click listener on #{control_id} failed: {}", js_error_message(&e)),
    }
}
