//! # Example
//!
//! A library catalog kept in memory, showing how a persistence layer wires the
//! [`deletion_guard`] into its delete operations.
//!
//! - An author cannot be deleted while the catalog has books of theirs.
//! - A book cannot be deleted while featured, or while it has loans.
//! - A member cannot be deleted while they have loans, unless their policy says otherwise.
//! - A loan cannot be deleted until the book is returned.

mod catalog;
mod library;
pub mod models;

pub use self::catalog::{Catalog, CatalogError, CatalogResult};
pub use self::library::Library;
