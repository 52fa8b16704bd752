//! Error types reported by the notification registry.
//!
//! Delivery failures never propagate to the publisher: the registry isolates
//! each observer, converts the failure into a [`NotifyError`], and routes it
//! to the registry's [`FailureSink`](crate::sinks::FailureSink). The helper
//! methods (`as_label`, `as_message`) exist for logging/metrics.

use thiserror::Error;

/// # Failures raised while delivering a notification.
///
/// These never abort fan-out to sibling observers and never surface to the
/// caller of `publish`; they are reported through the registry's failure sink.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum NotifyError {
    /// An observer panicked inside `receive`; the panic was caught and the
    /// remaining observers for that publish were still invoked.
    #[error("observer '{observer}' panicked while handling '{topic}': {reason}")]
    ObserverPanicked {
        /// Topic the notification was published under.
        topic: String,
        /// Name of the failing observer (see `Observe::name`).
        observer: &'static str,
        /// Panic payload rendered as text.
        reason: String,
    },
}

impl NotifyError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use notibus::NotifyError;
    ///
    /// let err = NotifyError::ObserverPanicked {
    ///     topic: "build.started".into(),
    ///     observer: "audit",
    ///     reason: "boom".into(),
    /// };
    /// assert_eq!(err.as_label(), "observer_panicked");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            NotifyError::ObserverPanicked { .. } => "observer_panicked",
        }
    }

    /// Returns a human-readable message with details about the failure.
    pub fn as_message(&self) -> String {
        match self {
            NotifyError::ObserverPanicked {
                topic,
                observer,
                reason,
            } => {
                format!("observer={observer} topic={topic} panic={reason}")
            }
        }
    }
}
