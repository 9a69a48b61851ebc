//! The library service, deleting catalog records through the deletion guard.

use std::rc::Rc;

use deletion_guard::prelude::{DeletionGuard, DeletionPolicy, LogSink, WarningSink};
use uuid::Uuid;

use crate::models::{Author, Book, Loan, Member};
use crate::{Catalog, CatalogError, CatalogResult};

/// The library service.
///
/// Every deletion goes through the [`DeletionGuard`]; the records are only removed from the
/// [`Catalog`] when the guard allows it.
pub struct Library<S = LogSink>
where
    S: WarningSink,
{
    catalog: Rc<Catalog>,
    guard: DeletionGuard<S>,
    member_policy: DeletionPolicy,
}

impl Library<LogSink> {
    /// Creates a new library, logging refused deletions with the [`log`] facade.
    pub fn new(catalog: Rc<Catalog>) -> Self {
        Self::with_sink(catalog, LogSink)
    }
}

impl<S> Library<S>
where
    S: WarningSink,
{
    /// Creates a new library, reporting refused deletions to `sink`.
    pub fn with_sink(catalog: Rc<Catalog>, sink: S) -> Self {
        Self {
            catalog,
            guard: DeletionGuard::new(sink),
            member_policy: DeletionPolicy::default(),
        }
    }

    /// Sets the deletion policy of members.
    pub fn with_member_policy(mut self, policy: DeletionPolicy) -> Self {
        self.member_policy = policy;
        self
    }

    pub fn catalog(&self) -> &Rc<Catalog> {
        &self.catalog
    }

    pub fn delete_author(&self, id: Uuid) -> CatalogResult<()> {
        if self.catalog.author_name(id).is_none() {
            return Err(CatalogError::NotFound { table: "authors", id });
        }
        let author = Author::new(&self.catalog, id);

        self.guard
            .delete(&author, |author| self.catalog.remove_author(author.id))?;
        log::info!("deleted author {id}");
        Ok(())
    }

    pub fn delete_book(&self, id: Uuid) -> CatalogResult<()> {
        let row = self
            .catalog
            .book(id)
            .ok_or(CatalogError::NotFound { table: "books", id })?;
        let book = Book::new(&self.catalog, id, row.author_id, row.featured);

        self.guard
            .delete(&book, |book| self.catalog.remove_book(book.id))?;
        log::info!("deleted book {id}");
        Ok(())
    }

    pub fn delete_member(&self, id: Uuid) -> CatalogResult<()> {
        if self.catalog.member_name(id).is_none() {
            return Err(CatalogError::NotFound { table: "members", id });
        }
        let member = Member::new(&self.catalog, id, self.member_policy.clone());

        self.guard
            .delete(&member, |member| self.catalog.remove_member(member.id))?;
        log::info!("deleted member {id}");
        Ok(())
    }

    pub fn delete_loan(&self, id: Uuid) -> CatalogResult<()> {
        let row = self
            .catalog
            .loan(id)
            .ok_or(CatalogError::NotFound { table: "loans", id })?;
        let loan = Loan::new(&self.catalog, id, row.book_id, row.member_id);

        self.guard
            .delete(&loan, |loan| self.catalog.remove_loan(loan.id))?;
        log::info!("deleted loan {id}");
        Ok(())
    }
}
