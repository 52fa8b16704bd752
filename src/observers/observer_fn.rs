//! # Closure-backed observer (`ObserverFn`)
//!
//! [`ObserverFn`] wraps a closure `F: Fn(&str, &Payload)`, so one-off reactive
//! bindings can subscribe without defining a named type.
//!
//! ## Example
//! ```rust
//! use notibus::{ObserverFn, ObserverRef, Payload, Registry};
//!
//! let registry = Registry::new();
//! let on_start: ObserverRef = ObserverFn::arc(|topic: &str, payload: &Payload| {
//!     println!("{topic}: {} values", payload.len());
//! });
//! registry.subscribe("build.started", &on_start);
//! ```

use std::sync::Arc;

use crate::payload::Payload;

use super::observer::{Observe, ObserverRef};

/// Closure-backed observer implementation.
pub struct ObserverFn<F> {
    name: &'static str,
    f: F,
}

impl<F> ObserverFn<F>
where
    F: Fn(&str, &Payload) + Send + Sync + 'static,
{
    /// Creates a new closure-backed observer.
    ///
    /// Prefer [`ObserverFn::arc`] when you immediately need an [`ObserverRef`].
    pub fn new(f: F) -> Self {
        Self {
            name: "observer_fn",
            f,
        }
    }

    /// Creates a closure-backed observer with an explicit name (shows up in
    /// failure-sink reports instead of the generic `observer_fn`).
    pub fn named(name: &'static str, f: F) -> Self {
        Self { name, f }
    }

    /// Creates the observer and returns it as a shared handle.
    ///
    /// Each call produces a **new identity**: subscribe and unsubscribe with
    /// clones of the returned handle, not with a second `arc` of the same
    /// closure.
    pub fn arc(f: F) -> ObserverRef {
        Arc::new(Self::new(f))
    }
}

impl<F> Observe for ObserverFn<F>
where
    F: Fn(&str, &Payload) + Send + Sync + 'static,
{
    fn receive(&self, topic: &str, payload: &Payload) {
        (self.f)(topic, payload);
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use parking_lot::Mutex;

    use super::*;

    #[test]
    fn test_closure_is_invoked_with_topic_and_payload() {
        let seen: Arc<Mutex<Vec<(String, usize)>>> = Arc::new(Mutex::new(Vec::new()));
        let seen2 = Arc::clone(&seen);
        let obs = ObserverFn::new(move |topic: &str, payload: &Payload| {
            seen2.lock().push((topic.to_string(), payload.len()));
        });

        obs.receive("demo", &Payload::single(1u8));
        let calls = seen.lock();
        assert_eq!(calls.as_slice(), &[("demo".to_string(), 1)]);
    }

    #[test]
    fn test_named_observer_reports_its_name() {
        let obs = ObserverFn::named("audit", |_: &str, _: &Payload| {});
        assert_eq!(obs.name(), "audit");

        let anon = ObserverFn::new(|_: &str, _: &Payload| {});
        assert_eq!(anon.name(), "observer_fn");
    }
}
