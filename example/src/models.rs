//! The guarded models of the catalog.

mod author;
mod book;
mod loan;
mod member;

pub use self::author::Author;
pub use self::book::Book;
pub use self::loan::Loan;
pub use self::member::Member;
