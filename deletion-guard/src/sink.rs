//! Sinks receiving the warnings emitted when a deletion is refused.

/// Target of the log records emitted by [`LogSink`].
pub const LOG_TARGET: &str = "deletion_guard";

/// The logging capability handed to the [`crate::prelude::DeletionGuard`].
///
/// The guard emits exactly one warning for each refused deletion and nothing when the
/// deletion is allowed.
pub trait WarningSink {
    /// Records a warning message.
    fn warning(&self, message: &str);
}

/// A [`WarningSink`] forwarding warnings to the [`log`] facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl WarningSink for LogSink {
    fn warning(&self, message: &str) {
        log::warn!(target: LOG_TARGET, "{message}");
    }
}

impl<F> WarningSink for F
where
    F: Fn(&str),
{
    fn warning(&self, message: &str) {
        self(message)
    }
}
