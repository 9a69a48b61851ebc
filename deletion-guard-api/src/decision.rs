use crate::error::{DeletionGuardError, DeletionGuardResult};

/// The outcome of evaluating whether a record may be deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// The record may be deleted.
    Allow,
    /// The record must not be deleted; carries the reason.
    Deny(String),
}

impl Decision {
    /// Returns whether the deletion is allowed.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }

    /// Returns whether the deletion is denied.
    pub fn is_denied(&self) -> bool {
        matches!(self, Decision::Deny(_))
    }

    /// Returns the reason of the denial, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Decision::Allow => None,
            Decision::Deny(message) => Some(message),
        }
    }

    /// Converts the decision into a result, turning a denial into a [`DeletionGuardError`].
    pub fn into_result(self) -> DeletionGuardResult<()> {
        match self {
            Decision::Allow => Ok(()),
            Decision::Deny(message) => Err(DeletionGuardError::new(message)),
        }
    }
}
