//! This module exposes the [`DeletionGuard`], deciding whether a record may be deleted.

mod relations;

use deletion_guard_api::prelude::{Decision, GuardedModel};

use self::relations::RelationsInspector;
use crate::sink::WarningSink;

/// Prefix of the message of a deletion refused because of related records.
pub const RELATED_RECORDS_MESSAGE: &str =
    "Cannot delete this record because it has related records: ";

/// Prefix of the warning emitted when a deletion is refused.
const WARNING_PREFIX: &str = "Deletion prevented: ";

/// The deletion guard.
///
/// The guard decides whether a [`GuardedModel`] instance may be deleted:
///
/// 1. The specific conditions of the model are checked in order; the first one which holds
///    refuses the deletion with its own message.
/// 2. The relations of the model are looked up; the deletion is refused if any relation,
///    other than a belongs-to relation, has related records.
///
/// When the model defines a deletion message, it replaces the message of any refusal.
/// Each refusal is reported to the [`WarningSink`] with exactly one warning.
///
/// The guard keeps no state across evaluations: the decision only depends on the model and
/// on the current content of the data store.
#[derive(Debug, Default, Clone)]
pub struct DeletionGuard<S>
where
    S: WarningSink,
{
    sink: S,
}

impl<S> DeletionGuard<S>
where
    S: WarningSink,
{
    /// Creates a new [`DeletionGuard`] reporting refusals to the given sink.
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Returns a reference to the warning sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Evaluates whether the given model may be deleted.
    ///
    /// # Errors
    ///
    /// Errors returned by condition checks and relation lookups are returned as they are.
    /// A refused deletion is **not** an error here: it is returned as [`Decision::Deny`].
    pub fn evaluate<M>(&self, model: &M) -> Result<Decision, M::Error>
    where
        M: GuardedModel,
    {
        if let Some(message) = self.first_holding_condition(model)? {
            return Ok(self.deny(model, message));
        }

        let blocking = RelationsInspector::new(model).blocking_relations()?;
        if blocking.is_empty() {
            return Ok(Decision::Allow);
        }

        let message = format!("{RELATED_RECORDS_MESSAGE}{}.", blocking.join(", "));
        Ok(self.deny(model, message))
    }

    /// Checks whether the given model may be deleted.
    ///
    /// This is the hook to run before deleting a record.
    ///
    /// # Errors
    ///
    /// A refused deletion is returned as a
    /// [`DeletionGuardError`](deletion_guard_api::prelude::DeletionGuardError) converted into the model's
    /// error type.
    pub fn check<M>(&self, model: &M) -> Result<(), M::Error>
    where
        M: GuardedModel,
    {
        self.evaluate(model)?.into_result().map_err(Into::into)
    }

    /// Deletes the given model with `delete`, only if the guard allows it.
    ///
    /// `delete` is never called if the deletion is refused.
    pub fn delete<M, F, R>(&self, model: &M, delete: F) -> Result<R, M::Error>
    where
        M: GuardedModel,
        F: FnOnce(&M) -> Result<R, M::Error>,
    {
        self.check(model)?;
        delete(model)
    }

    /// Returns the message of the first specific condition which holds, if any.
    ///
    /// Conditions after the first holding one are not evaluated.
    fn first_holding_condition<M>(&self, model: &M) -> Result<Option<String>, M::Error>
    where
        M: GuardedModel,
    {
        let Some(provider) = model.conditions() else {
            return Ok(None);
        };

        for condition in provider.specific_conditions() {
            if condition.holds()? {
                return Ok(Some(condition.message().to_string()));
            }
        }

        Ok(None)
    }

    /// Refuses the deletion, applying the model's deletion message and reporting the warning.
    fn deny<M>(&self, model: &M, message: String) -> Decision
    where
        M: GuardedModel,
    {
        let message = match model.deletion_message() {
            Some(custom) => custom.to_string(),
            None => message,
        };
        self.sink.warning(&format!("{WARNING_PREFIX}{message}"));

        Decision::Deny(message)
    }
}
