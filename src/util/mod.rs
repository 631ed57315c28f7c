//! Environment adapters for the theme controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser adapters wrap `web-sys` and only touch the page in hydrate
//! builds; elsewhere they quietly do nothing so SSR stays deterministic.
//! In-memory adapters back the tests and any host without a DOM.

pub mod document;
pub mod storage;

/// Best-effort message from a thrown JS value.
#[cfg(feature = "hydrate")]
pub(crate) fn js_error_message(err: &wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast;

    match err.dyn_ref::<js_sys::Error>() {
        Some(e) => String::from(e.message()),
        None => format!("{err:?}"),
    }
}
