use std::rc::Rc;

use deletion_guard::prelude::{GuardedModel, Relation, SpecificCondition, SpecificConditions};
use uuid::Uuid;

use crate::{Catalog, CatalogError};

/// A book; a book has many loans and belongs to its author.
///
/// A featured book cannot be deleted, whatever its loans.
#[derive(Debug, GuardedModel)]
#[guarded(error = CatalogError, relations(loans, author), conditions)]
pub struct Book {
    pub id: Uuid,
    pub author_id: Uuid,
    pub featured: bool,
    catalog: Rc<Catalog>,
}

impl Book {
    pub fn new(catalog: &Rc<Catalog>, id: Uuid, author_id: Uuid, featured: bool) -> Self {
        Self {
            id,
            author_id,
            featured,
            catalog: Rc::clone(catalog),
        }
    }

    pub fn loans(&self) -> Relation<'_, CatalogError> {
        Relation::has_many(|| Ok(self.catalog.book_has_loans(self.id)))
    }

    pub fn author(&self) -> Relation<'_, CatalogError> {
        Relation::belongs_to(|| Ok(self.catalog.author_name(self.author_id).is_some()))
    }
}

impl SpecificConditions for Book {
    type Error = CatalogError;

    fn specific_conditions(&self) -> Vec<SpecificCondition<'_, Self::Error>> {
        vec![SpecificCondition::new(
            self.featured,
            "Featured books cannot be deleted; un-feature the book first.",
        )]
    }
}
