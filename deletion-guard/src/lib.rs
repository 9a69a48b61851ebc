#![crate_name = "deletion_guard"]
#![crate_type = "lib"]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Deletion Guard
//!
//! Prevents the deletion of a record while it still has related records in other tables,
//! or while one of the custom conditions of its model holds.
//!
//! A model declares its relations by implementing [`prelude::GuardedModel`], usually with
//! `#[derive(GuardedModel)]`. Before deleting a record, the persistence layer runs
//! [`prelude::DeletionGuard::check`] on it: a refused deletion is logged as a warning and
//! returned as a [`prelude::DeletionGuardError`], converted into the model's error type.
//!
//! ```rust,ignore
//! use deletion_guard::prelude::*;
//!
//! #[derive(GuardedModel)]
//! #[guarded(error = StoreError, relations(posts, team))]
//! struct User {
//!     id: u32,
//!     store: Rc<Store>,
//! }
//!
//! impl User {
//!     fn posts(&self) -> Relation<'_, StoreError> {
//!         Relation::has_many(|| self.store.exists("posts", "user_id", self.id))
//!     }
//!
//!     fn team(&self) -> Relation<'_, StoreError> {
//!         Relation::belongs_to(|| self.store.exists("teams", "id", self.team_id))
//!     }
//! }
//!
//! let guard = DeletionGuard::new(LogSink);
//! guard.delete(&user, |user| store.delete("users", user.id))?;
//! ```

#![doc(html_playground_url = "https://play.rust-lang.org")]

// makes the crate accessible as `deletion_guard` in macros
extern crate self as deletion_guard;

pub mod guard;
pub mod hook;
pub mod prelude;
pub mod sink;
#[cfg(test)]
mod tests;
