//! Lifecycle hooks run before a record is deleted.

use deletion_guard_api::prelude::GuardedModel;

use crate::guard::DeletionGuard;
use crate::sink::WarningSink;

/// A hook run by the persistence layer before deleting a model.
///
/// Returning an error aborts the deletion.
pub trait DeletingHook<M>
where
    M: GuardedModel,
{
    /// Called before `model` is deleted.
    fn deleting(&self, model: &M) -> Result<(), M::Error>;
}

impl<M, S> DeletingHook<M> for DeletionGuard<S>
where
    M: GuardedModel,
    S: WarningSink,
{
    fn deleting(&self, model: &M) -> Result<(), M::Error> {
        self.check(model)
    }
}

impl<M, F> DeletingHook<M> for F
where
    M: GuardedModel,
    F: Fn(&M) -> Result<(), M::Error>,
{
    fn deleting(&self, model: &M) -> Result<(), M::Error> {
        self(model)
    }
}

/// Runs the hooks in order, stopping at the first one aborting the deletion.
pub fn run_deleting_hooks<M>(hooks: &[&dyn DeletingHook<M>], model: &M) -> Result<(), M::Error>
where
    M: GuardedModel,
{
    hooks.iter().try_for_each(|hook| hook.deleting(model))
}
