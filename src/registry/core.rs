//! # Registry core: the topic → observers map and fan-out delivery.
//!
//! One `RwLock` guards the whole map; `publish` holds it only long enough to
//! clone the topic's observer list, then delivers outside the lock. That
//! single discipline buys all three concurrency guarantees at once: no torn
//! reads, re-entrancy from inside `receive`, and the snapshot semantics of
//! "changes during delivery affect only subsequent publishes".

use std::any::Any;
use std::collections::HashMap;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::error::NotifyError;
use crate::observers::ObserverRef;
use crate::payload::Payload;
use crate::sinks::{FailureSink, LogSink};

/// Process-wide default registry (created on first use).
static GLOBAL: Lazy<Registry> = Lazy::new(Registry::new);

/// In-process notification center.
///
/// Maps topic names to the observers currently subscribed to them and fans
/// each publish out to the topic's observers, synchronously, on the calling
/// thread.
///
/// ### Properties
/// - **Implicit topics**: created by the first subscription, dropped with the
///   last unsubscribe; publishing to an unknown topic is a silent no-op.
/// - **Identity-keyed**: observers are recognized by their `Arc` allocation,
///   so one handle subscribed to several topics can be removed everywhere
///   with a single [`Registry::unsubscribe_all`] call.
/// - **Isolated delivery**: a panicking observer is reported to the failure
///   sink and never blocks delivery to its siblings.
pub struct Registry {
    topics: RwLock<HashMap<String, Vec<ObserverRef>>>,
    sink: Arc<dyn FailureSink>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Creates a registry with the default [`LogSink`] failure sink.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sink(Arc::new(LogSink))
    }

    /// Creates a registry routing delivery failures to `sink`.
    #[must_use]
    pub fn with_sink(sink: Arc<dyn FailureSink>) -> Self {
        Self {
            topics: RwLock::new(HashMap::new()),
            sink,
        }
    }

    /// Returns the process-wide default registry.
    ///
    /// Binding layers that need one shared center without threading a handle
    /// through every collaborator use this; tests should construct their own
    /// [`Registry::new`] instances instead.
    #[must_use]
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Registers `observer` for future notifications on `topic`.
    ///
    /// The topic is created on first use. Subscribing the same identity to
    /// the same topic again is a no-op, so delivery stays at most once per
    /// publish even after accidental double registration.
    pub fn subscribe(&self, topic: impl Into<String>, observer: &ObserverRef) {
        let mut topics = self.topics.write();
        let entries = topics.entry(topic.into()).or_default();
        if !entries.iter().any(|o| same_identity(o, observer)) {
            entries.push(Arc::clone(observer));
        }
    }

    /// Removes `observer` from `topic` only; other subscriptions of the same
    /// observer stay intact. No-op if it was not subscribed to `topic`.
    pub fn unsubscribe(&self, topic: &str, observer: &ObserverRef) {
        let mut topics = self.topics.write();
        if let Some(entries) = topics.get_mut(topic) {
            entries.retain(|o| !same_identity(o, observer));
            if entries.is_empty() {
                topics.remove(topic);
            }
        }
    }

    /// Removes `observer` from every topic it is subscribed to.
    ///
    /// Global remove by identity; no-op if the observer was never subscribed.
    /// Starting with the next publish the observer receives nothing.
    pub fn unsubscribe_all(&self, observer: &ObserverRef) {
        let mut topics = self.topics.write();
        topics.retain(|_, entries| {
            entries.retain(|o| !same_identity(o, observer));
            !entries.is_empty()
        });
    }

    /// Delivers `(topic, payload)` to every observer currently subscribed to
    /// `topic`, in subscription order, on the calling thread.
    ///
    /// Works on a snapshot of the observer list taken at call time:
    /// subscriptions changed during delivery (including by the observers
    /// themselves) affect only subsequent publishes. Publishing to a topic
    /// with no subscribers returns immediately.
    ///
    /// A panicking observer is isolated: the panic is caught, reported to the
    /// failure sink as [`NotifyError::ObserverPanicked`], and delivery
    /// continues with the remaining observers.
    pub fn publish(&self, topic: &str, payload: Payload) {
        let snapshot: Vec<ObserverRef> = {
            let topics = self.topics.read();
            match topics.get(topic) {
                Some(entries) => entries.clone(),
                None => return,
            }
        };

        for observer in snapshot {
            let call = AssertUnwindSafe(|| observer.receive(topic, &payload));
            if let Err(panic_err) = catch_unwind(call) {
                let failure = NotifyError::ObserverPanicked {
                    topic: topic.to_string(),
                    observer: observer.name(),
                    reason: panic_reason(panic_err.as_ref()),
                };
                self.sink.on_failure(&failure);
            }
        }
    }

    /// True if `observer` is currently subscribed to `topic`.
    #[must_use]
    pub fn is_subscribed(&self, topic: &str, observer: &ObserverRef) -> bool {
        let topics = self.topics.read();
        topics
            .get(topic)
            .is_some_and(|entries| entries.iter().any(|o| same_identity(o, observer)))
    }

    /// Number of observers currently subscribed to `topic` (0 if unknown).
    #[must_use]
    pub fn observer_count(&self, topic: &str) -> usize {
        let topics = self.topics.read();
        topics.get(topic).map_or(0, Vec::len)
    }

    /// Number of topics with at least one observer.
    #[must_use]
    pub fn topic_count(&self) -> usize {
        self.topics.read().len()
    }
}

/// Identity comparison by `Arc` allocation.
///
/// Compares the data pointers only; comparing the vtable halves of the fat
/// pointers would be unreliable across codegen units.
fn same_identity(a: &ObserverRef, b: &ObserverRef) -> bool {
    std::ptr::eq(
        Arc::as_ptr(a) as *const (),
        Arc::as_ptr(b) as *const (),
    )
}

/// Renders a caught panic payload as text for the failure sink.
fn panic_reason(err: &(dyn Any + Send)) -> String {
    if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
