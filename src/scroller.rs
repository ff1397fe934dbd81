//! Office bearer scroller: freeze the auto-scroll on first manual scroll.
//!
//! The scroller animates on its own through CSS. Browsers fire `scroll` only
//! for user-driven scrolling (wheel, trackpad, touch drag), so the first
//! event marks the scroller overridden and the listener is detached.

#[cfg(test)]
#[path = "scroller_test.rs"]
mod scroller_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crate::config::SiteConfig;
use crate::dom::{ClassList, Page, Timers};

/// Whether the scroller is still animating on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollState {
    #[default]
    Auto,
    Overridden,
}

#[derive(Debug)]
pub struct ScrollFreeze<E> {
    scroller: E,
    override_class: String,
    state: Cell<ScrollState>,
}

impl<E: ClassList + Clone> ScrollFreeze<E> {
    #[must_use]
    pub fn new(scroller: E, override_class: impl Into<String>) -> Self {
        Self {
            scroller,
            override_class: override_class.into(),
            state: Cell::new(ScrollState::Auto),
        }
    }

    pub fn discover<P: Page<Element = E>>(page: &P, config: &SiteConfig) -> Option<Self> {
        let scroller = page.query_selector(&config.scroller_selector)?;
        Some(Self::new(scroller, config.override_class.clone()))
    }

    #[must_use]
    pub fn scroller(&self) -> &E {
        &self.scroller
    }

    #[must_use]
    pub fn state(&self) -> ScrollState {
        self.state.get()
    }

    /// Handle a scroll event. Returns `true` exactly once, on the transition
    /// to [`ScrollState::Overridden`]; the caller detaches its listener then.
    pub fn on_scroll(&self) -> bool {
        match self.state.get() {
            ScrollState::Overridden => false,
            ScrollState::Auto => {
                self.state.set(ScrollState::Overridden);
                self.scroller.add_class(&self.override_class);
                true
            }
        }
    }
}

/// Drop whatever `slot` holds on the next timer tick.
///
/// A scroll listener cannot free itself while it is running, so the owner
/// clears the slot once the current event has returned.
pub fn release_later<T: 'static, S: Timers>(timers: &S, slot: &Rc<RefCell<Option<T>>>) {
    let slot = Rc::clone(slot);
    timers.schedule(
        Duration::ZERO,
        Box::new(move || {
            drop(slot.borrow_mut().take());
        }),
    );
}
