//! `web-sys` implementations of the capability traits.

use std::time::Duration;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, FormData, HtmlFormElement};

use super::BindError;
use crate::dom::{Alerter, ClassList, FormControl, Page, Timers};
use crate::form::FormSnapshot;

impl ClassList for Element {
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        if let Err(err) = self.class_list().add_1(class) {
            log::warn!("classList.add({class}) failed: {err:?}");
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(err) = self.class_list().remove_1(class) {
            log::warn!("classList.remove({class}) failed: {err:?}");
        }
    }

    fn toggle_class(&self, class: &str) {
        if let Err(err) = self.class_list().toggle(class) {
            log::warn!("classList.toggle({class}) failed: {err:?}");
        }
    }
}

impl FormControl for HtmlFormElement {
    fn snapshot(&self) -> FormSnapshot {
        match form_entries(self) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                log::warn!("reading form fields failed: {err}");
                FormSnapshot::default()
            }
        }
    }

    fn reset(&self) {
        HtmlFormElement::reset(self);
    }
}

/// Text entries of the form's data set. File inputs are skipped.
fn form_entries(form: &HtmlFormElement) -> Result<FormSnapshot, BindError> {
    let data = FormData::new_with_form(form)?;
    let mut snapshot = FormSnapshot::default();
    let Some(entries) = js_sys::try_iter(&data)? else {
        return Ok(snapshot);
    };
    for entry in entries {
        let pair: js_sys::Array = entry?.unchecked_into();
        if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
            snapshot.push(name, value);
        }
    }
    Ok(snapshot)
}

/// The live document.
#[derive(Clone, Debug)]
pub struct DomPage {
    document: Document,
}

impl DomPage {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Text of an element, used for the JSON configuration block.
    #[must_use]
    pub fn text_of(&self, id: &str) -> Option<String> {
        self.document.get_element_by_id(id)?.text_content()
    }
}

impl Page for DomPage {
    type Element = Element;
    type Form = HtmlFormElement;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn form_by_id(&self, id: &str) -> Option<HtmlFormElement> {
        self.document
            .get_element_by_id(id)?
            .dyn_into::<HtmlFormElement>()
            .into_iter()
            .next()
    }

    fn query_selector(&self, selector: &str) -> Option<Element> {
        match self.document.query_selector(selector) {
            Ok(found) => found,
            Err(err) => {
                log::warn!("invalid selector {selector}: {err:?}");
                None
            }
        }
    }

    fn query_selector_all(&self, selector: &str) -> Vec<Element> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(err) => {
                log::warn!("invalid selector {selector}: {err:?}");
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .flat_map(|node| node.dyn_into::<Element>())
            .collect()
    }
}

/// `setTimeout`-backed timers.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimers;

impl Timers for BrowserTimers {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, task).forget();
    }
}

/// `window.alert`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowAlerter;

impl Alerter for WindowAlerter {
    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            log::warn!("no window to alert: {message}");
            return;
        };
        if let Err(err) = window.alert_with_message(message) {
            log::warn!("alert failed: {err:?}");
        }
    }
}
