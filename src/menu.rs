//! Mobile navigation menu toggle.
//!
//! A click on the hamburger button flips the panel's `hidden` class. The
//! behavior only exists when both elements are on the page.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::config::SiteConfig;
use crate::dom::{ClassList, Page};

#[derive(Clone, Debug)]
pub struct MenuToggle<E> {
    trigger: E,
    panel: E,
    hidden_class: String,
}

impl<E: ClassList + Clone> MenuToggle<E> {
    #[must_use]
    pub fn new(trigger: E, panel: E, hidden_class: impl Into<String>) -> Self {
        Self {
            trigger,
            panel,
            hidden_class: hidden_class.into(),
        }
    }

    /// Look up the trigger and panel. `None` when either is missing.
    pub fn discover<P: Page<Element = E>>(page: &P, config: &SiteConfig) -> Option<Self> {
        let trigger = page.element_by_id(&config.menu_button_id)?;
        let panel = page.element_by_id(&config.menu_panel_id)?;
        Some(Self::new(trigger, panel, config.hidden_class.clone()))
    }

    /// Element that receives the click listener.
    #[must_use]
    pub fn trigger(&self) -> &E {
        &self.trigger
    }

    /// Handle one activation of the trigger.
    pub fn on_click(&self) {
        self.panel.toggle_class(&self.hidden_class);
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        !self.panel.has_class(&self.hidden_class)
    }
}
