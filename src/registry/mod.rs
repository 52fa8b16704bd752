//! # Notification registry: topic-keyed subscribe/unsubscribe/publish.
//!
//! The [`Registry`] owns the map from topic name to the observers currently
//! subscribed to it and performs synchronous fan-out on publish. [`Channel`]
//! is a thin topic-pre-bound handle for call sites that always talk to one
//! topic.
//!
//! ## Architecture
//! ```text
//! subscribe / unsubscribe          publish(topic, payload)
//!          │                                │
//!          ▼                                ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │  Registry                                               │
//! │  RwLock<HashMap<topic, Vec<ObserverRef>>>               │
//! │    - write lock: mutate observer lists                  │
//! │    - read lock: clone snapshot of one topic's list      │
//! └───────────────────────────┬─────────────────────────────┘
//!                             │  (lock released)
//!                             ▼
//!              for each observer in snapshot:
//!                  catch_unwind(observer.receive(topic, &payload))
//!                        │ on panic
//!                        ▼
//!                  FailureSink::on_failure(NotifyError)
//! ```
//!
//! ## Rules
//! - **Snapshot delivery**: a publish iterates over a copy of the topic's
//!   observer list taken at call time; subscriptions added or removed during
//!   delivery affect only subsequent publishes.
//! - **Set semantics**: one observer identity appears at most once per topic;
//!   re-subscribing is a no-op and delivery is at most once per publish.
//! - **Order**: delivery follows subscription order.
//! - **No executor**: observers run on the publishing thread.

mod channel;
mod core;

pub use channel::Channel;
pub use self::core::Registry;
