use std::error::Error as StdError;

use thiserror::Error;

/// Boxed cause carried by a [`DeletionGuardError`].
pub type BoxedCause = Box<dyn StdError + Send + Sync + 'static>;

/// Error returned when the deletion of a record is refused.
///
/// The error is never used for anything else than signaling a refused deletion:
/// errors raised while looking up relations or evaluating conditions are propagated
/// as they are, with the model's own error type.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct DeletionGuardError {
    message: String,
    code: i32,
    #[source]
    source: Option<BoxedCause>,
}

impl DeletionGuardError {
    /// Creates a new [`DeletionGuardError`] with the given message, code `0` and no cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: 0,
            source: None,
        }
    }

    /// Sets the numeric code of the error.
    pub fn with_code(mut self, code: i32) -> Self {
        self.code = code;
        self
    }

    /// Sets the error which caused the deletion to be refused.
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Into<BoxedCause>,
    {
        self.source = Some(source.into());
        self
    }

    /// Returns the human-readable reason why the deletion was refused.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the numeric code of the error.
    pub fn code(&self) -> i32 {
        self.code
    }
}

/// Deletion guard result type.
pub type DeletionGuardResult<T> = Result<T, DeletionGuardError>;
