//! The in-memory catalog storage.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use deletion_guard::prelude::DeletionGuardError;
use thiserror::Error;
use uuid::Uuid;

/// Catalog error type.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Deletion refused: {0}")]
    DeletionRefused(#[from] DeletionGuardError),
    #[error("{table} record not found: {id}")]
    NotFound { table: &'static str, id: Uuid },
}

/// Catalog result type.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Clone)]
pub(crate) struct BookRow {
    pub author_id: Uuid,
    pub title: String,
    pub featured: bool,
}

#[derive(Debug, Clone)]
pub(crate) struct LoanRow {
    pub book_id: Uuid,
    pub member_id: Uuid,
    pub returned: bool,
}

/// The catalog storage.
///
/// Records are only identified by their [`Uuid`]; integrity between tables is not enforced
/// by the storage, but by the [`crate::Library`] through the deletion guard.
#[derive(Debug, Default)]
pub struct Catalog {
    authors: RefCell<HashMap<Uuid, String>>,
    books: RefCell<HashMap<Uuid, BookRow>>,
    members: RefCell<HashMap<Uuid, String>>,
    loans: RefCell<HashMap<Uuid, LoanRow>>,
}

impl Catalog {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn add_author(&self, name: impl Into<String>) -> Uuid {
        let id = Uuid::now_v7();
        self.authors.borrow_mut().insert(id, name.into());
        id
    }

    pub fn add_book(&self, author_id: Uuid, title: impl Into<String>) -> Uuid {
        let id = Uuid::now_v7();
        self.books.borrow_mut().insert(
            id,
            BookRow {
                author_id,
                title: title.into(),
                featured: false,
            },
        );
        id
    }

    pub fn add_member(&self, name: impl Into<String>) -> Uuid {
        let id = Uuid::now_v7();
        self.members.borrow_mut().insert(id, name.into());
        id
    }

    /// Lends a book to a member, returning the id of the loan.
    pub fn lend(&self, book_id: Uuid, member_id: Uuid) -> Uuid {
        let id = Uuid::now_v7();
        self.loans.borrow_mut().insert(
            id,
            LoanRow {
                book_id,
                member_id,
                returned: false,
            },
        );
        id
    }

    /// Marks the loan as returned.
    pub fn return_loan(&self, loan_id: Uuid) -> CatalogResult<()> {
        let mut loans = self.loans.borrow_mut();
        let loan = loans.get_mut(&loan_id).ok_or(CatalogError::NotFound {
            table: "loans",
            id: loan_id,
        })?;
        loan.returned = true;
        Ok(())
    }

    /// Features or un-features a book.
    pub fn set_featured(&self, book_id: Uuid, featured: bool) -> CatalogResult<()> {
        let mut books = self.books.borrow_mut();
        let book = books.get_mut(&book_id).ok_or(CatalogError::NotFound {
            table: "books",
            id: book_id,
        })?;
        book.featured = featured;
        Ok(())
    }

    pub fn author_name(&self, id: Uuid) -> Option<String> {
        self.authors.borrow().get(&id).cloned()
    }

    pub fn book_title(&self, id: Uuid) -> Option<String> {
        self.books.borrow().get(&id).map(|book| book.title.clone())
    }

    pub fn member_name(&self, id: Uuid) -> Option<String> {
        self.members.borrow().get(&id).cloned()
    }

    pub fn has_loan(&self, id: Uuid) -> bool {
        self.loans.borrow().contains_key(&id)
    }

    pub(crate) fn book(&self, id: Uuid) -> Option<BookRow> {
        self.books.borrow().get(&id).cloned()
    }

    pub(crate) fn loan(&self, id: Uuid) -> Option<LoanRow> {
        self.loans.borrow().get(&id).cloned()
    }

    pub(crate) fn author_has_books(&self, author_id: Uuid) -> bool {
        self.books
            .borrow()
            .values()
            .any(|book| book.author_id == author_id)
    }

    pub(crate) fn book_has_loans(&self, book_id: Uuid) -> bool {
        self.loans
            .borrow()
            .values()
            .any(|loan| loan.book_id == book_id)
    }

    pub(crate) fn member_has_loans(&self, member_id: Uuid) -> bool {
        self.loans
            .borrow()
            .values()
            .any(|loan| loan.member_id == member_id)
    }

    pub(crate) fn remove_author(&self, id: Uuid) -> CatalogResult<()> {
        self.authors
            .borrow_mut()
            .remove(&id)
            .map(|_| ())
            .ok_or(CatalogError::NotFound { table: "authors", id })
    }

    pub(crate) fn remove_book(&self, id: Uuid) -> CatalogResult<()> {
        self.books
            .borrow_mut()
            .remove(&id)
            .map(|_| ())
            .ok_or(CatalogError::NotFound { table: "books", id })
    }

    pub(crate) fn remove_member(&self, id: Uuid) -> CatalogResult<()> {
        self.members
            .borrow_mut()
            .remove(&id)
            .map(|_| ())
            .ok_or(CatalogError::NotFound { table: "members", id })
    }

    pub(crate) fn remove_loan(&self, id: Uuid) -> CatalogResult<()> {
        self.loans
            .borrow_mut()
            .remove(&id)
            .map(|_| ())
            .ok_or(CatalogError::NotFound { table: "loans", id })
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_should_track_loans() {
        let catalog = Catalog::new();
        let author = catalog.add_author("Ursula K. Le Guin");
        let book = catalog.add_book(author, "The Dispossessed");
        let member = catalog.add_member("Shevek");

        assert!(catalog.author_has_books(author));
        assert!(!catalog.book_has_loans(book));

        let loan = catalog.lend(book, member);
        assert!(catalog.book_has_loans(book));
        assert!(catalog.member_has_loans(member));

        catalog.return_loan(loan).expect("failed to return loan");
        assert!(catalog.loan(loan).is_some_and(|loan| loan.returned));
    }

    #[test]
    fn test_should_fail_on_unknown_records() {
        let catalog = Catalog::new();
        let id = Uuid::now_v7();
        assert!(matches!(
            catalog.return_loan(id),
            Err(CatalogError::NotFound { table: "loans", .. })
        ));
        assert!(matches!(
            catalog.remove_book(id),
            Err(CatalogError::NotFound { table: "books", .. })
        ));
    }
}
