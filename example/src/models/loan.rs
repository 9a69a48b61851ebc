use std::rc::Rc;

use deletion_guard::prelude::{GuardedModel, Relation, SpecificCondition, SpecificConditions};
use uuid::Uuid;

use crate::{Catalog, CatalogError};

/// A loan of a book to a member; it belongs to both.
///
/// A loan never has blocking relations, but it cannot be deleted until the book is returned.
#[derive(Debug, GuardedModel)]
#[guarded(error = CatalogError, relations(book, member), conditions)]
pub struct Loan {
    pub id: Uuid,
    pub book_id: Uuid,
    pub member_id: Uuid,
    catalog: Rc<Catalog>,
}

impl Loan {
    pub fn new(catalog: &Rc<Catalog>, id: Uuid, book_id: Uuid, member_id: Uuid) -> Self {
        Self {
            id,
            book_id,
            member_id,
            catalog: Rc::clone(catalog),
        }
    }

    pub fn book(&self) -> Relation<'_, CatalogError> {
        Relation::belongs_to(|| Ok(self.catalog.book_title(self.book_id).is_some()))
    }

    pub fn member(&self) -> Relation<'_, CatalogError> {
        Relation::belongs_to(|| Ok(self.catalog.member_name(self.member_id).is_some()))
    }
}

impl SpecificConditions for Loan {
    type Error = CatalogError;

    fn specific_conditions(&self) -> Vec<SpecificCondition<'_, Self::Error>> {
        vec![SpecificCondition::lazy(
            || {
                self.catalog
                    .loan(self.id)
                    .map(|loan| !loan.returned)
                    .ok_or(CatalogError::NotFound {
                        table: "loans",
                        id: self.id,
                    })
            },
            "Cannot delete a loan before the book is returned.",
        )]
    }
}
