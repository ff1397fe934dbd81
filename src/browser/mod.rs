//! Browser entry point and `web-sys` bindings.
//!
//! SYSTEM CONTEXT
//! ==============
//! Compiled only with the `browser` feature. `start` runs when the wasm module
//! loads, waits for `DOMContentLoaded` if the document is still parsing, then
//! discovers and wires the four behaviors against the live DOM.

pub mod page;
pub mod transport;
pub mod wiring;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Document;

use crate::config::{CONFIG_ELEMENT_ID, SiteConfig};
use crate::startup::Behaviors;
use page::DomPage;

/// Error raised while binding a behavior to the DOM.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    /// A DOM call threw.
    #[error("js error: {0}")]
    Js(String),
}

impl From<JsValue> for BindError {
    fn from(value: JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&JsValue::from_str("clubsite: logger already initialized"));
    }
    if let Err(err) = boot() {
        log::error!("clubsite startup failed: {err}");
    }
}

fn boot() -> Result<(), BindError> {
    let document = web_sys::window()
        .ok_or(BindError::NoWindow)?
        .document()
        .ok_or(BindError::NoDocument)?;

    let ready_state = js_sys::Reflect::get(&document, &JsValue::from_str("readyState"))?;
    if ready_state.as_string().as_deref() == Some("loading") {
        let target = document.clone();
        let on_ready = Closure::once_into_js(move || install(document));
        target.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    } else {
        install(document);
    }
    Ok(())
}

fn install(document: Document) {
    let page = DomPage::new(document);
    let config = SiteConfig::from_page_block(page.text_of(CONFIG_ELEMENT_ID).as_deref());
    let behaviors = Behaviors::discover(&page, &config);
    let summary = wiring::wire_all(behaviors);
    log::info!("site behaviors installed: {summary}");
}
