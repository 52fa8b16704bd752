//! # Core failure-sink trait
//!
//! `FailureSink` is the extension point for routing per-observer delivery
//! failures somewhere useful. It is called synchronously from `publish`, on
//! the publishing thread, after the failing observer has been isolated.
//!
//! ## Contract
//! - Implementations should be cheap; a slow sink delays the remaining
//!   fan-out of the current publish.
//! - A sink must not panic. A panicking sink is a bug in the embedding
//!   application, not something the registry guards against.

use crate::error::NotifyError;

/// Receiver for isolated delivery failures.
pub trait FailureSink: Send + Sync + 'static {
    /// Report one delivery failure.
    ///
    /// # Parameters
    /// - `failure`: the failure, already detached from the observer (does not
    ///   transfer ownership)
    fn on_failure(&self, failure: &NotifyError);

    /// Human-readable name (for logs).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
