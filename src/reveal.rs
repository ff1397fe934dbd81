//! Fade-in of page sections as they scroll into view.
//!
//! The threshold is handed to the intersection observer, which decides when
//! to report. Any report that says the target is intersecting reveals it,
//! whatever its ratio: a section taller than ten viewports never reaches a
//! 0.1 ratio but still has to appear. The visible class is kept for the rest
//! of the session. Reveal order follows report order, not document order.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::config::SiteConfig;
use crate::dom::{ClassList, Page};

/// One observer report for one target.
#[derive(Clone, Debug)]
pub struct Intersection<E> {
    pub target: E,
    pub is_intersecting: bool,
}

#[derive(Clone, Debug)]
pub struct ScrollReveal<E> {
    targets: Vec<E>,
    threshold: f64,
    visible_class: String,
}

impl<E: ClassList + Clone> ScrollReveal<E> {
    #[must_use]
    pub fn new(targets: Vec<E>, threshold: f64, visible_class: impl Into<String>) -> Self {
        Self {
            targets,
            threshold,
            visible_class: visible_class.into(),
        }
    }

    /// Collect every section to observe. `None` when there are none.
    pub fn discover<P: Page<Element = E>>(page: &P, config: &SiteConfig) -> Option<Self> {
        let targets = page.query_selector_all(&config.reveal_selector);
        if targets.is_empty() {
            return None;
        }
        let visible_class = config.visible_class.clone();
        Some(Self::new(targets, config.reveal_threshold, visible_class))
    }

    #[must_use]
    pub fn targets(&self) -> &[E] {
        &self.targets
    }

    /// Visible fraction at which the observer reports.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    #[must_use]
    pub fn is_revealed(&self, target: &E) -> bool {
        target.has_class(&self.visible_class)
    }

    /// Apply a batch of reports. Returns the targets revealed by this batch,
    /// which the caller may stop observing.
    pub fn on_intersections(&self, entries: impl IntoIterator<Item = Intersection<E>>) -> Vec<E> {
        let mut revealed = Vec::new();
        for entry in entries {
            if !entry.is_intersecting || self.is_revealed(&entry.target) {
                continue;
            }
            entry.target.add_class(&self.visible_class);
            revealed.push(entry.target);
        }
        revealed
    }
}
