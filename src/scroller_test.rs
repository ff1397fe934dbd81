use super::*;
use crate::testing::{FakeElement, FakePage, ManualTimers};

#[test]
fn starts_in_auto_state() {
    let freeze = ScrollFreeze::new(FakeElement::default(), "manual-override");
    assert_eq!(freeze.state(), ScrollState::Auto);
    assert!(!freeze.scroller().has_class("manual-override"));
}

#[test]
fn first_scroll_overrides_and_requests_detach() {
    let scroller = FakeElement::with_classes(&["scroller"]);
    let freeze = ScrollFreeze::new(scroller.clone(), "manual-override");
    assert!(freeze.on_scroll());
    assert_eq!(freeze.state(), ScrollState::Overridden);
    assert!(scroller.has_class("manual-override"));
}

#[test]
fn setup_runs_once_across_many_events() {
    let scroller = FakeElement::default();
    let freeze = ScrollFreeze::new(scroller.clone(), "manual-override");
    let detaches = (0..25).filter(|_| freeze.on_scroll()).count();
    assert_eq!(detaches, 1);
    assert_eq!(freeze.state(), ScrollState::Overridden);
}

#[test]
fn override_is_never_unset() {
    let scroller = FakeElement::default();
    let freeze = ScrollFreeze::new(scroller.clone(), "manual-override");
    freeze.on_scroll();
    freeze.on_scroll();
    assert!(scroller.has_class("manual-override"));
}

#[test]
fn discover_uses_first_match() {
    let first = FakeElement::default();
    let matches = [first.clone(), FakeElement::default()];
    let page = FakePage::default().with_selection(".scroller", &matches);
    let config = SiteConfig::default();
    let freeze = ScrollFreeze::discover(&page, &config).unwrap();
    assert!(freeze.scroller().same(&first));
}

#[test]
fn discover_without_scroller_is_none() {
    let config = SiteConfig::default();
    assert!(ScrollFreeze::discover(&FakePage::default(), &config).is_none());
}

#[test]
fn held_listener_is_released_after_the_event() {
    let timers = ManualTimers::default();
    let slot = Rc::new(RefCell::new(Some(String::from("listener"))));
    release_later(&timers, &slot);
    assert!(slot.borrow().is_some());
    assert_eq!(timers.pending(), 1);

    timers.advance(Duration::ZERO);
    assert!(slot.borrow().is_none());
    assert_eq!(timers.pending(), 0);
}

#[test]
fn releasing_an_empty_slot_is_harmless() {
    let timers = ManualTimers::default();
    let slot: Rc<RefCell<Option<u8>>> = Rc::new(RefCell::new(None));
    release_later(&timers, &slot);
    timers.advance(Duration::ZERO);
    assert!(slot.borrow().is_none());
}
