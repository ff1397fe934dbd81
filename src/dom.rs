//! Capability traits the behaviors are written against.
//!
//! SYSTEM CONTEXT
//! ==============
//! Behaviors never touch `web-sys` directly. They see elements only as
//! class lists, forms only as snapshot/reset, and the outside world as
//! timers and a blocking alert. The `browser` module implements these over
//! the real DOM; unit tests implement them in memory.

use std::time::Duration;

use crate::form::FormSnapshot;

/// Presentation-state markers on an element.
pub trait ClassList {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);

    /// Add `class` if absent, remove it if present.
    fn toggle_class(&self, class: &str) {
        if self.has_class(class) {
            self.remove_class(class);
        } else {
            self.add_class(class);
        }
    }
}

/// A form whose named fields can be read and cleared.
pub trait FormControl {
    /// Named field values at this moment, in document order.
    fn snapshot(&self) -> FormSnapshot;
    /// Restore every field to its default value.
    fn reset(&self);
}

/// Element lookup on a loaded page.
pub trait Page {
    type Element: ClassList + Clone + 'static;
    type Form: FormControl + Clone + 'static;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
    fn form_by_id(&self, id: &str) -> Option<Self::Form>;
    fn query_selector(&self, selector: &str) -> Option<Self::Element>;
    fn query_selector_all(&self, selector: &str) -> Vec<Self::Element>;
}

/// One-shot delayed callbacks.
pub trait Timers {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>);
}

/// Blocking user-facing notice.
pub trait Alerter {
    fn alert(&self, message: &str);
}
