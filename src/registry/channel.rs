//! # Topic-pre-bound registry handle.
//!
//! A [`Channel`] pairs a shared [`Registry`] with one topic name, so binding
//! layers that always talk to the same topic avoid repeating it at every
//! call site. It is a plain passthrough: a channel adds no semantics of its
//! own, and observers subscribed through a channel can still be removed
//! directly on the registry.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use notibus::{Channel, ObserverFn, Payload, Registry};
//!
//! let registry = Arc::new(Registry::new());
//! let progress = Channel::new(Arc::clone(&registry), "build.progress");
//!
//! let bar = ObserverFn::arc(|_topic: &str, payload: &Payload| {
//!     if let Some(pct) = payload.get::<u8>(0) {
//!         println!("{pct}%");
//!     }
//! });
//! progress.subscribe(&bar);
//! progress.publish(Payload::single(40u8));
//! progress.unsubscribe(&bar);
//! ```

use std::sync::Arc;

use crate::observers::ObserverRef;
use crate::payload::Payload;

use super::core::Registry;

/// Convenience handle bound to a single topic of a shared registry.
#[derive(Clone)]
pub struct Channel {
    registry: Arc<Registry>,
    topic: String,
}

impl Channel {
    /// Binds `topic` on `registry`.
    #[must_use]
    pub fn new(registry: Arc<Registry>, topic: impl Into<String>) -> Self {
        Self {
            registry,
            topic: topic.into(),
        }
    }

    /// The bound topic name.
    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// The underlying registry.
    #[must_use]
    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Registers `observer` on the bound topic.
    pub fn subscribe(&self, observer: &ObserverRef) {
        self.registry.subscribe(self.topic.clone(), observer);
    }

    /// Removes `observer` from the bound topic only.
    pub fn unsubscribe(&self, observer: &ObserverRef) {
        self.registry.unsubscribe(&self.topic, observer);
    }

    /// Publishes `payload` under the bound topic.
    pub fn publish(&self, payload: Payload) {
        self.registry.publish(&self.topic, payload);
    }
}

#[cfg(test)]
mod tests {
    use parking_lot::Mutex;

    use crate::observers::ObserverFn;

    use super::*;

    #[test]
    fn test_channel_passes_through_to_registry() {
        let registry = Arc::new(Registry::new());
        let channel = Channel::new(Arc::clone(&registry), "build.progress");
        assert_eq!(channel.topic(), "build.progress");

        let seen: Arc<Mutex<Vec<u8>>> = Arc::new(Mutex::new(Vec::new()));
        let seen2 = Arc::clone(&seen);
        let obs = ObserverFn::arc(move |topic: &str, payload: &Payload| {
            assert_eq!(topic, "build.progress");
            if let Some(pct) = payload.get::<u8>(0) {
                seen2.lock().push(*pct);
            }
        });

        channel.subscribe(&obs);
        assert!(registry.is_subscribed("build.progress", &obs));

        channel.publish(Payload::single(40u8));
        channel.publish(Payload::single(80u8));
        assert_eq!(seen.lock().as_slice(), &[40, 80]);

        channel.unsubscribe(&obs);
        channel.publish(Payload::single(100u8));
        assert_eq!(seen.lock().len(), 2);
    }

    #[test]
    fn test_channels_share_one_registry() {
        let registry = Arc::new(Registry::new());
        let a = Channel::new(Arc::clone(&registry), "sync");
        let b = Channel::new(Arc::clone(&registry), "sync");

        let seen: Arc<Mutex<u32>> = Arc::new(Mutex::new(0));
        let seen2 = Arc::clone(&seen);
        let obs = ObserverFn::arc(move |_: &str, _: &Payload| *seen2.lock() += 1);

        a.subscribe(&obs);
        b.publish(Payload::empty());
        assert_eq!(*seen.lock(), 1, "publish on b reaches subscriber of a");
    }
}
