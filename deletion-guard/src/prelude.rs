//! Re-exports all the most commonly used items from this crate.

pub use deletion_guard_api::prelude::*;
pub use deletion_guard_macros::GuardedModel;

pub use crate::guard::{DeletionGuard, RELATED_RECORDS_MESSAGE};
pub use crate::hook::{DeletingHook, run_deleting_hooks};
pub use crate::sink::{LogSink, WarningSink};
