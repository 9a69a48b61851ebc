#![crate_name = "deletion_guard_api"]
#![crate_type = "lib"]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Deletion Guard API
//!
//! This crate exposes all the types a model needs in order to be guarded against deletion:
//! the relation registry, the relation handles, the specific conditions and the error
//! returned when a deletion is refused.
//!
//! The decision procedure itself lives in the `deletion-guard` crate.

#![doc(html_playground_url = "https://play.rust-lang.org")]

mod decision;
mod error;
pub mod model;
pub mod prelude;

pub use self::decision::Decision;
pub use self::error::{DeletionGuardError, DeletionGuardResult};
