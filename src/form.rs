//! Contact form submission to the Google Forms endpoint.
//!
//! The native submit is suppressed by the caller; this module snapshots the
//! named fields, posts them in no-cors mode, and drives the feedback.
//!
//! ERROR HANDLING
//! ==============
//! A no-cors response is opaque, so the only observable outcomes are "the
//! request went out" ([`Sent`]) and [`TransportError`]. A server-side
//! rejection looks exactly like success and is reported as [`Sent`].
//! Transport errors are logged and surfaced through one blocking alert;
//! retry is the user submitting again.
//!
//! Repeated submits are not debounced. Each success schedules its own hide
//! timer, so the earliest pending timer hides the message.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::future::Future;
use std::time::Duration;

use crate::config::SiteConfig;
use crate::dom::{Alerter, ClassList, FormControl, Page, Timers};

/// Named field values captured at submit time, in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    fields: Vec<(String, String)>,
}

impl FormSnapshot {
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for FormSnapshot {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let fields = iter.into_iter().map(|(n, v)| (n.into(), v.into()));
        Self {
            fields: fields.collect(),
        }
    }
}

/// The request reached the network layer. Nothing more is knowable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sent;

/// The request failed before or during transport.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request body could not be assembled.
    #[error("failed to build request: {0}")]
    Build(String),
    /// The fetch itself rejected (offline, DNS, blocked).
    #[error("network error: {0}")]
    Network(String),
}

/// Either outcome a no-cors send can observe.
pub type SendOutcome = Result<Sent, TransportError>;

/// Fire-and-forget delivery of form fields to an endpoint.
pub trait FormTransport {
    fn send(&self, endpoint: &str, fields: &FormSnapshot) -> impl Future<Output = SendOutcome>;
}

#[derive(Clone, Debug)]
pub struct FormSubmitter<F, E> {
    form: F,
    success_message: E,
    endpoint: String,
    hide_after: Duration,
    hidden_class: String,
    error_alert: String,
}

impl<F, E> FormSubmitter<F, E>
where
    F: FormControl + Clone,
    E: ClassList + Clone + 'static,
{
    /// Look up the form and its success message. `None` when either is missing.
    pub fn discover<P>(page: &P, config: &SiteConfig) -> Option<Self>
    where
        P: Page<Element = E, Form = F>,
    {
        let form = page.form_by_id(&config.form_id)?;
        let success_message = page.element_by_id(&config.success_message_id)?;
        Some(Self {
            form,
            success_message,
            endpoint: config.form_endpoint.clone(),
            hide_after: Duration::from_millis(u64::from(config.success_hide_ms)),
            hidden_class: config.hidden_class.clone(),
            error_alert: config.error_alert_message.clone(),
        })
    }

    #[must_use]
    pub fn form(&self) -> &F {
        &self.form
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send the current field values and apply the resulting feedback.
    ///
    /// # Errors
    ///
    /// Returns the [`TransportError`] after it has been logged and alerted.
    pub async fn submit<T, S, A>(&self, transport: &T, timers: &S, alerter: &A) -> SendOutcome
    where
        T: FormTransport,
        S: Timers,
        A: Alerter,
    {
        let fields = self.form.snapshot();
        log::debug!("submitting contact form: fields={}", fields.len());
        let outcome = transport.send(&self.endpoint, &fields).await;
        match &outcome {
            Ok(Sent) => self.on_sent(timers),
            Err(err) => self.on_transport_error(err, alerter),
        }
        outcome
    }

    fn on_sent<S: Timers>(&self, timers: &S) {
        self.form.reset();
        self.success_message.remove_class(&self.hidden_class);

        let message = self.success_message.clone();
        let hidden_class = self.hidden_class.clone();
        timers.schedule(
            self.hide_after,
            Box::new(move || message.add_class(&hidden_class)),
        );
    }

    fn on_transport_error<A: Alerter>(&self, err: &TransportError, alerter: &A) {
        log::error!("Error submitting form: {err}");
        alerter.alert(&self.error_alert);
    }
}
