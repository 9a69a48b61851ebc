use std::rc::Rc;

use deletion_guard::prelude::{GuardedModel, Relation};
use uuid::Uuid;

use crate::{Catalog, CatalogError};

/// An author; an author has many books.
#[derive(Debug, GuardedModel)]
#[guarded(error = CatalogError, relations(books))]
pub struct Author {
    pub id: Uuid,
    catalog: Rc<Catalog>,
}

impl Author {
    pub fn new(catalog: &Rc<Catalog>, id: Uuid) -> Self {
        Self {
            id,
            catalog: Rc::clone(catalog),
        }
    }

    pub fn books(&self) -> Relation<'_, CatalogError> {
        Relation::has_many(|| Ok(self.catalog.author_has_books(self.id)))
    }
}
