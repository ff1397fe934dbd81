//! In-memory page, timers, alert, and transport for native unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use crate::dom::{Alerter, ClassList, FormControl, Page, Timers};
use crate::form::{FormSnapshot, FormTransport, SendOutcome, Sent, TransportError};

#[derive(Clone, Debug, Default)]
pub struct FakeElement {
    classes: Rc<RefCell<BTreeSet<String>>>,
}

impl FakeElement {
    pub fn with_classes(classes: &[&str]) -> Self {
        let el = Self::default();
        for class in classes {
            el.add_class(class);
        }
        el
    }

    pub fn same(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.classes, &other.classes)
    }
}

impl ClassList for FakeElement {
    fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    fn add_class(&self, class: &str) {
        self.classes.borrow_mut().insert(class.to_owned());
    }

    fn remove_class(&self, class: &str) {
        self.classes.borrow_mut().remove(class);
    }
}

/// Form with `(name, value, default)` fields.
#[derive(Clone, Debug, Default)]
pub struct FakeForm {
    fields: Rc<RefCell<Vec<(String, String, String)>>>,
}

impl FakeForm {
    pub fn with_fields(fields: &[(&str, &str)]) -> Self {
        let form = Self::default();
        for (name, value) in fields {
            let field = ((*name).to_owned(), (*value).to_owned(), String::new());
            form.fields.borrow_mut().push(field);
        }
        form
    }

    pub fn value(&self, name: &str) -> Option<String> {
        self.fields
            .borrow()
            .iter()
            .find(|(n, _, _)| n == name)
            .map(|(_, v, _)| v.clone())
    }

    pub fn set_value(&self, name: &str, value: &str) {
        for (n, v, _) in self.fields.borrow_mut().iter_mut() {
            if n == name {
                *v = value.to_owned();
            }
        }
    }

    pub fn all_empty(&self) -> bool {
        self.fields.borrow().iter().all(|(_, v, _)| v.is_empty())
    }
}

impl FormControl for FakeForm {
    fn snapshot(&self) -> FormSnapshot {
        self.fields
            .borrow()
            .iter()
            .map(|(name, value, _)| (name.clone(), value.clone()))
            .collect()
    }

    fn reset(&self) {
        for (_, value, default) in self.fields.borrow_mut().iter_mut() {
            value.clone_from(default);
        }
    }
}

#[derive(Default)]
pub struct FakePage {
    pub elements: HashMap<String, FakeElement>,
    pub forms: HashMap<String, FakeForm>,
    pub selections: HashMap<String, Vec<FakeElement>>,
}

impl FakePage {
    pub fn with_element(mut self, id: &str, el: &FakeElement) -> Self {
        self.elements.insert(id.to_owned(), el.clone());
        self
    }

    pub fn with_form(mut self, id: &str, form: &FakeForm) -> Self {
        self.forms.insert(id.to_owned(), form.clone());
        self
    }

    pub fn with_selection(mut self, selector: &str, els: &[FakeElement]) -> Self {
        self.selections.insert(selector.to_owned(), els.to_vec());
        self
    }
}

impl Page for FakePage {
    type Element = FakeElement;
    type Form = FakeForm;

    fn element_by_id(&self, id: &str) -> Option<FakeElement> {
        self.elements.get(id).cloned()
    }

    fn form_by_id(&self, id: &str) -> Option<FakeForm> {
        self.forms.get(id).cloned()
    }

    fn query_selector(&self, selector: &str) -> Option<FakeElement> {
        self.query_selector_all(selector).into_iter().next()
    }

    fn query_selector_all(&self, selector: &str) -> Vec<FakeElement> {
        self.selections.get(selector).cloned().unwrap_or_default()
    }
}

type Task = Box<dyn FnOnce()>;

/// Virtual clock; tasks run only when [`ManualTimers::advance`] passes their due time.
#[derive(Clone, Default)]
pub struct ManualTimers {
    now: Rc<Cell<Duration>>,
    pending: Rc<RefCell<Vec<(Duration, Task)>>>,
}

impl ManualTimers {
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn advance(&self, by: Duration) {
        let target = self.now.get() + by;
        loop {
            let next = {
                let mut pending = self.pending.borrow_mut();
                let due = pending
                    .iter()
                    .enumerate()
                    .filter(|(_, (at, _))| *at <= target)
                    .min_by_key(|(_, (at, _))| *at)
                    .map(|(i, _)| i);
                due.map(|i| pending.remove(i))
            };
            let Some((at, task)) = next else {
                break;
            };
            self.now.set(at);
            task();
        }
        self.now.set(target);
    }
}

impl Timers for ManualTimers {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let due = self.now.get() + delay;
        self.pending.borrow_mut().push((due, task));
    }
}

#[derive(Clone, Default)]
pub struct RecordingAlerter {
    pub messages: Rc<RefCell<Vec<String>>>,
}

impl Alerter for RecordingAlerter {
    fn alert(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_owned());
    }
}

/// Transport that answers every request with a fixed outcome.
#[derive(Clone, Default)]
pub struct StubTransport {
    pub fail_with: Option<String>,
    pub requests: Rc<RefCell<Vec<(String, FormSnapshot)>>>,
}

impl StubTransport {
    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_owned()),
            ..Self::default()
        }
    }
}

impl FormTransport for StubTransport {
    fn send(&self, endpoint: &str, fields: &FormSnapshot) -> impl Future<Output = SendOutcome> {
        self.requests
            .borrow_mut()
            .push((endpoint.to_owned(), fields.clone()));
        let outcome = match &self.fail_with {
            Some(message) => Err(TransportError::Network(message.clone())),
            None => Ok(Sent),
        };
        std::future::ready(outcome)
    }
}
