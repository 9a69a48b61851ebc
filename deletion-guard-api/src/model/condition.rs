/// A custom rule which prevents the deletion of a model when it holds.
///
/// The condition is either a value computed when the conditions are collected, or a lazy
/// check run only if all the previous conditions did not hold.
pub struct SpecificCondition<'a, E> {
    condition: Condition<'a, E>,
    message: String,
}

enum Condition<'a, E> {
    Value(bool),
    Check(Box<dyn Fn() -> Result<bool, E> + 'a>),
}

impl<'a, E> SpecificCondition<'a, E> {
    /// Creates a condition from an already computed value.
    pub fn new(condition: bool, message: impl Into<String>) -> Self {
        Self {
            condition: Condition::Value(condition),
            message: message.into(),
        }
    }

    /// Creates a condition evaluated only when the guard reaches it.
    pub fn lazy<F>(check: F, message: impl Into<String>) -> Self
    where
        F: Fn() -> Result<bool, E> + 'a,
    {
        Self {
            condition: Condition::Check(Box::new(check)),
            message: message.into(),
        }
    }

    /// Evaluates the condition.
    pub fn holds(&self) -> Result<bool, E> {
        match &self.condition {
            Condition::Value(value) => Ok(*value),
            Condition::Check(check) => check(),
        }
    }

    /// Returns the message reported when the condition holds.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl<E> std::fmt::Debug for SpecificCondition<'_, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpecificCondition")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Capability implemented by models defining custom deletion rules.
///
/// The conditions are checked in order before any relation is looked up; the first one
/// which holds refuses the deletion.
pub trait SpecificConditions {
    /// Error returned by lazy condition checks.
    type Error;

    /// Returns the conditions of the model, in evaluation order.
    fn specific_conditions(&self) -> Vec<SpecificCondition<'_, Self::Error>>;
}
