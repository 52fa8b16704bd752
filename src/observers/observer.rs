//! # Core observer trait
//!
//! `Observe` is the extension point for plugging notification handlers into a
//! [`Registry`](crate::registry::Registry). Each observer is invoked
//! synchronously on the publishing thread.
//!
//! ## Contract
//! - `receive` runs on the **caller's** thread; there is no internal executor.
//!   Callers that need a specific execution context (a UI thread, a worker
//!   pool) wrap the observer themselves.
//! - Panics inside `receive` are caught by the registry and reported to its
//!   failure sink; sibling observers of the same publish are still invoked.
//! - Observers may re-enter the registry (subscribe, unsubscribe, publish)
//!   from inside `receive`; changes take effect from the next publish.

use std::sync::Arc;

use crate::payload::Payload;

/// Contract for notification observers.
///
/// Called once per matching publish with the topic name and a reference to
/// the payload (no ownership transfer).
pub trait Observe: Send + Sync + 'static {
    /// Handle a single notification for this observer.
    ///
    /// # Parameters
    /// - `topic`: the topic the notification was published under
    /// - `payload`: the publisher's payload, unmodified and in order
    fn receive(&self, topic: &str, payload: &Payload);

    /// Human-readable name (for the failure sink / logs).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Shared observer handle.
///
/// The registry identifies observers by the `Arc` allocation: clones of one
/// `ObserverRef` are the same observer across `subscribe`/`unsubscribe` calls.
pub type ObserverRef = Arc<dyn Observe>;
