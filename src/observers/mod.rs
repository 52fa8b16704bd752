//! # Observers: user-facing notification handlers.
//!
//! This module provides the [`Observe`] trait and the [`ObserverFn`] closure
//! adapter for receiving notifications published through the
//! [`Registry`](crate::registry::Registry).
//!
//! ## Architecture
//! ```text
//! Notification flow:
//!   publisher ── publish(topic, payload) ──► Registry ──► snapshot of topic's observers
//!                                                │
//!                                                ├──► Observe::receive(topic, &payload)
//!                                                │         │
//!                                                │    ┌────┴────┬──────────┬───────┐
//!                                                │    ▼         ▼          ▼       ▼
//!                                                │  binding   metrics   closure   ...
//!                                                │  layer     hook    (ObserverFn)
//!                                                │
//!                                                └──► FailureSink (panic isolation)
//! ```
//!
//! ## Identity
//! Observers are held as [`ObserverRef`] (`Arc<dyn Observe>`); the registry
//! recognizes an observer by its `Arc` allocation, not by value. Keep a clone
//! of the same `Arc` to unsubscribe later; a freshly created observer is
//! always a distinct identity.
//!
//! ## Implementing custom observers
//! ```rust
//! use notibus::{Observe, Payload};
//!
//! struct BuildBadge;
//!
//! impl Observe for BuildBadge {
//!     fn receive(&self, topic: &str, payload: &Payload) {
//!         let _ = (topic, payload);
//!         // update badge state...
//!     }
//! }
//! ```

mod observer;
mod observer_fn;

pub use observer::{Observe, ObserverRef};
pub use observer_fn::ObserverFn;
