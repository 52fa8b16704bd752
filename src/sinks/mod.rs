//! # Failure sinks: where isolated delivery failures go.
//!
//! A panicking observer must not abort fan-out to its siblings, and must not
//! silently swallow the failure either. The registry catches the panic,
//! wraps it in a [`NotifyError`](crate::error::NotifyError), and hands it to
//! its [`FailureSink`].
//!
//! The default sink is [`LogSink`] (reports via the `log` facade); pass a
//! custom sink to [`Registry::with_sink`](crate::registry::Registry::with_sink)
//! to route failures into metrics, alerts, or test assertions.

mod log;
mod sink;

pub use self::log::LogSink;
pub use sink::FailureSink;
