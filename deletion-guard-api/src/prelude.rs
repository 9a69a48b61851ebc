//! Prelude exposes all the types for `deletion-guard-api` crate.

pub use crate::decision::Decision;
pub use crate::error::{DeletionGuardError, DeletionGuardResult};
pub use crate::model::{
    AsRelationNames, DeletionPolicy, GuardedModel, Relation, RelationDef, RelationKind,
    RelationNames, SpecificCondition, SpecificConditions,
};
