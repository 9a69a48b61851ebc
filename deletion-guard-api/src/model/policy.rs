use serde::{Deserialize, Serialize};

use super::RelationNames;

/// The per-model deletion settings, in a form which can be loaded from configuration.
///
/// Every field is optional. A missing relation list is not the same as an empty one:
/// an empty `included_relations` lets no relation block the deletion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeletionPolicy {
    excluded_relations: Option<Vec<String>>,
    included_relations: Option<Vec<String>>,
    deletion_message: Option<String>,
}

impl DeletionPolicy {
    /// Sets the relations which never block the deletion.
    pub fn exclude<I, S>(mut self, relations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_relations = Some(relations.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the only relations which may block the deletion.
    pub fn include<I, S>(mut self, relations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.included_relations = Some(relations.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the message replacing any message of a refused deletion.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.deletion_message = Some(message.into());
        self
    }

    pub fn excluded_relations(&self) -> Option<RelationNames<'_>> {
        self.excluded_relations.as_deref().map(RelationNames::from)
    }

    pub fn included_relations(&self) -> Option<RelationNames<'_>> {
        self.included_relations.as_deref().map(RelationNames::from)
    }

    pub fn deletion_message(&self) -> Option<&str> {
        self.deletion_message.as_deref()
    }
}
