//! Discovery of all four page behaviors in one startup pass.
//!
//! Each behavior is looked up on its own; a missing element only drops the
//! behavior that needs it.

#[cfg(test)]
#[path = "startup_test.rs"]
mod startup_test;

use std::fmt;

use crate::config::SiteConfig;
use crate::dom::Page;
use crate::form::FormSubmitter;
use crate::menu::MenuToggle;
use crate::reveal::ScrollReveal;
use crate::scroller::ScrollFreeze;

/// The behaviors whose elements were found on the page.
pub struct Behaviors<P: Page> {
    pub menu: Option<MenuToggle<P::Element>>,
    pub reveal: Option<ScrollReveal<P::Element>>,
    pub form: Option<FormSubmitter<P::Form, P::Element>>,
    pub scroller: Option<ScrollFreeze<P::Element>>,
}

impl<P: Page> Behaviors<P> {
    pub fn discover(page: &P, config: &SiteConfig) -> Self {
        let behaviors = Self {
            menu: MenuToggle::discover(page, config),
            reveal: ScrollReveal::discover(page, config),
            form: FormSubmitter::discover(page, config),
            scroller: ScrollFreeze::discover(page, config),
        };
        if behaviors.menu.is_none() {
            let (button, panel) = (&config.menu_button_id, &config.menu_panel_id);
            log::debug!("menu toggle skipped: #{button} or #{panel} missing");
        }
        if behaviors.reveal.is_none() {
            log::debug!("scroll reveal skipped: no {} elements", config.reveal_selector);
        }
        if behaviors.form.is_none() {
            let (form, message) = (&config.form_id, &config.success_message_id);
            log::debug!("form submitter skipped: #{form} or #{message} missing");
        }
        if behaviors.scroller.is_none() {
            log::debug!("scroll freeze skipped: no {} element", config.scroller_selector);
        }
        behaviors
    }

    #[must_use]
    pub fn summary(&self) -> InstallSummary {
        InstallSummary {
            menu: self.menu.is_some(),
            reveal_targets: self.reveal.as_ref().map_or(0, |r| r.targets().len()),
            form: self.form.is_some(),
            scroller: self.scroller.is_some(),
        }
    }
}

/// Which behaviors were installed, for the startup log line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InstallSummary {
    pub menu: bool,
    pub reveal_targets: usize,
    pub form: bool,
    pub scroller: bool,
}

impl fmt::Display for InstallSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let on = |b: bool| if b { "on" } else { "off" };
        write!(
            f,
            "menu={} reveal={} form={} scroller={}",
            on(self.menu),
            self.reveal_targets,
            on(self.form),
            on(self.scroller)
        )
    }
}
