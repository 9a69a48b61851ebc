use std::rc::Rc;

use deletion_guard::prelude::{DeletionPolicy, GuardedModel, Relation};
use uuid::Uuid;

use crate::{Catalog, CatalogError};

/// A library member; a member has many loans.
///
/// The deletion rules of members are configurable with a [`DeletionPolicy`].
#[derive(Debug, GuardedModel)]
#[guarded(error = CatalogError, relations(loans))]
pub struct Member {
    pub id: Uuid,
    #[guarded(policy)]
    pub policy: DeletionPolicy,
    catalog: Rc<Catalog>,
}

impl Member {
    pub fn new(catalog: &Rc<Catalog>, id: Uuid, policy: DeletionPolicy) -> Self {
        Self {
            id,
            policy,
            catalog: Rc::clone(catalog),
        }
    }

    pub fn loans(&self) -> Relation<'_, CatalogError> {
        Relation::has_many(|| Ok(self.catalog.member_has_loans(self.id)))
    }
}
