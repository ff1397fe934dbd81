//! Event listeners that connect DOM events to the behaviors.
//!
//! Listener closures live for the whole page (`Closure::forget`), except the
//! scroller's, which detaches itself after the first manual scroll and is
//! dropped on the next timer tick.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, Event, HtmlFormElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use super::BindError;
use super::page::{BrowserTimers, DomPage, WindowAlerter};
use super::transport::FetchTransport;
use crate::form::FormSubmitter;
use crate::menu::MenuToggle;
use crate::reveal::{Intersection, ScrollReveal};
use crate::scroller::{ScrollFreeze, release_later};
use crate::startup::{Behaviors, InstallSummary};

type EventListener = Closure<dyn FnMut(Event)>;

/// Attach every discovered behavior. A binding failure only drops that behavior.
pub fn wire_all(behaviors: Behaviors<DomPage>) -> InstallSummary {
    let mut summary = behaviors.summary();
    if let Some(menu) = behaviors.menu {
        if let Err(err) = wire_menu(menu) {
            log::error!("menu toggle not installed: {err}");
            summary.menu = false;
        }
    }
    if let Some(reveal) = behaviors.reveal {
        if let Err(err) = wire_reveal(reveal) {
            log::error!("scroll reveal not installed: {err}");
            summary.reveal_targets = 0;
        }
    }
    if let Some(form) = behaviors.form {
        if let Err(err) = wire_form(form) {
            log::error!("form submitter not installed: {err}");
            summary.form = false;
        }
    }
    if let Some(scroller) = behaviors.scroller {
        if let Err(err) = wire_scroller(scroller) {
            log::error!("scroll freeze not installed: {err}");
            summary.scroller = false;
        }
    }
    summary
}

fn wire_menu(menu: MenuToggle<Element>) -> Result<(), BindError> {
    let trigger = menu.trigger().clone();
    let on_click = EventListener::new(move |_event: Event| menu.on_click());
    let listener = on_click.as_ref().unchecked_ref();
    trigger.add_event_listener_with_callback("click", listener)?;
    on_click.forget();
    Ok(())
}

fn wire_reveal(reveal: ScrollReveal<Element>) -> Result<(), BindError> {
    let targets = reveal.targets().to_vec();
    let threshold = reveal.threshold();

    let on_entries = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let reports = entries
                .iter()
                .flat_map(|value| value.dyn_into::<IntersectionObserverEntry>())
                .map(|entry| Intersection {
                    target: entry.target(),
                    is_intersecting: entry.is_intersecting(),
                });
            // Revealed targets can never change again.
            for target in reveal.on_intersections(reports) {
                observer.unobserve(&target);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let callback = on_entries.as_ref().unchecked_ref();
    let observer = IntersectionObserver::new_with_options(callback, &options)?;
    for target in &targets {
        observer.observe(target);
    }
    on_entries.forget();
    Ok(())
}

fn wire_form(submitter: FormSubmitter<HtmlFormElement, Element>) -> Result<(), BindError> {
    let form = submitter.form().clone();
    let submitter = Rc::new(submitter);

    let on_submit = EventListener::new(move |event: Event| {
        event.prevent_default();
        let submitter = Rc::clone(&submitter);
        wasm_bindgen_futures::spawn_local(async move {
            if submitter
                .submit(&FetchTransport, &BrowserTimers, &WindowAlerter)
                .await
                .is_ok()
            {
                log::info!("contact form sent");
            }
        });
    });
    let listener = on_submit.as_ref().unchecked_ref();
    form.add_event_listener_with_callback("submit", listener)?;
    on_submit.forget();
    Ok(())
}

fn wire_scroller(freeze: ScrollFreeze<Element>) -> Result<(), BindError> {
    let scroller = freeze.scroller().clone();
    let target = scroller.clone();
    let holder: Rc<RefCell<Option<EventListener>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);

    let on_scroll = EventListener::new(move |_event: Event| {
        if !freeze.on_scroll() {
            return;
        }
        log::debug!("scroller switched to manual");
        if let Some(cb) = holder_for_cb.borrow().as_ref() {
            let listener = cb.as_ref().unchecked_ref();
            if let Err(err) = target.remove_event_listener_with_callback("scroll", listener) {
                log::warn!("removing scroll listener failed: {err:?}");
            }
        }
        // This closure is still on the stack; drop it once the event returns.
        release_later(&BrowserTimers, &holder_for_cb);
    });
    let listener = on_scroll.as_ref().unchecked_ref();
    scroller.add_event_listener_with_callback("scroll", listener)?;
    *holder.borrow_mut() = Some(on_scroll);
    Ok(())
}
