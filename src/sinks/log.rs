//! # Default failure sink backed by the `log` facade.
//!
//! [`LogSink`] emits one `warn` record per isolated delivery failure, using
//! the stable label plus the detailed message:
//!
//! ```text
//! WARN notibus: observer_panicked: observer=audit topic=build.started panic=boom
//! ```
//!
//! The library never installs a logger; the embedding application picks one
//! (`env_logger`, `tracing-log`, ...). Without a logger the records go
//! nowhere, which matches "best-effort reporting".

use crate::error::NotifyError;

use super::sink::FailureSink;

/// Failure sink that logs through the `log` facade.
///
/// This is the sink installed by [`Registry::new`](crate::registry::Registry::new).
/// Implement a custom [`FailureSink`] for metrics or alerting instead of
/// parsing log output.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl FailureSink for LogSink {
    fn on_failure(&self, failure: &NotifyError) {
        log::warn!(target: "notibus", "{}: {}", failure.as_label(), failure.as_message());
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
