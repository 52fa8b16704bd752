//! # notibus
//!
//! **Notibus** is a lightweight, synchronous, in-process notification center
//! for Rust.
//!
//! Independent components communicate by topic name without holding direct
//! references to one another: a publisher announces an event under a
//! string-identified topic, optionally carrying an arbitrary payload; every
//! observer registered under that topic is invoked synchronously with the
//! topic name and the payload. The crate is designed as a building block for
//! higher-level binding layers (view/model wiring, plugin hooks, progress
//! reporting).
//!
//! ## Architecture
//! ```text
//!   ┌────────────┐      ┌────────────┐      ┌────────────┐
//!   │ publisher  │      │ publisher  │      │  Channel   │
//!   │ (any code) │      │ (worker)   │      │ (pre-bound │
//!   └─────┬──────┘      └─────┬──────┘      │   topic)   │
//!         │                   │             └─────┬──────┘
//!         │ publish(T, pl)    │                   │
//!         ▼                   ▼                   ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │  Registry                                               │
//! │  topic → [ObserverRef, ...]  (one RwLock, set-by-       │
//! │  identity, subscription order preserved)                │
//! └───────┬──────────────────────────────────────┬──────────┘
//!         │ snapshot of topic's observers        │ on panic
//!         ▼                                      ▼
//!   Observe::receive(topic, &payload)      FailureSink
//!   (synchronous, on the publishing        (LogSink by
//!    thread, isolated per observer)         default)
//! ```
//!
//! ## Guarantees
//! - **Snapshot delivery**: each publish iterates a copy of the topic's
//!   observer list taken at call time; subscribe/unsubscribe during delivery
//!   (including re-entrant calls from observers) affect only later publishes.
//! - **At-most-once per publish**: per-topic observer collections are sets
//!   keyed by `Arc` identity; double registration does not double delivery.
//! - **Isolated failures**: a panicking observer is caught, reported to the
//!   registry's [`FailureSink`], and never robs its siblings of delivery.
//! - **No executor**: delivery happens on the publishing thread. Callers
//!   needing a specific execution context wrap their observers themselves.
//!
//! ## Features
//! | Area           | Description                                                  | Key types / traits            |
//! |----------------|--------------------------------------------------------------|-------------------------------|
//! | **Registry**   | Topic-keyed subscribe/unsubscribe/publish with fan-out.      | [`Registry`], [`Channel`]     |
//! | **Observers**  | Single-method capability, plus a closure adapter.            | [`Observe`], [`ObserverFn`]   |
//! | **Payloads**   | Ordered, opaque, cheaply cloneable value sequences.          | [`Payload`], [`Value`]        |
//! | **Failures**   | Per-observer isolation routed to a caller-supplied sink.     | [`FailureSink`], [`LogSink`]  |
//! | **Errors**     | Typed delivery failures for logs/metrics.                    | [`NotifyError`]               |
//!
//! ## Example
//! ```rust
//! use notibus::{ObserverFn, Payload, Registry};
//!
//! let registry = Registry::new();
//!
//! // One-off reactive binding: closures subscribe via ObserverFn.
//! let banner = ObserverFn::arc(|topic: &str, payload: &Payload| {
//!     println!("[{topic}] {} payload value(s)", payload.len());
//! });
//! registry.subscribe("build.started", &banner);
//!
//! registry.publish("build.started", Payload::single("release".to_string()));
//!
//! // Global remove by identity: one handle, every topic.
//! registry.unsubscribe_all(&banner);
//! registry.publish("build.started", Payload::empty()); // silent no-op
//! ```

mod error;
mod observers;
mod payload;
mod registry;
mod sinks;

// ---- Public re-exports ----

pub use error::NotifyError;
pub use observers::{Observe, ObserverFn, ObserverRef};
pub use payload::{Payload, Value};
pub use registry::{Channel, Registry};
pub use sinks::{FailureSink, LogSink};
