#![crate_name = "deletion_guard_macros"]
#![crate_type = "lib"]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Macros and derive for deletion-guard
//!
//! This crate provides procedural macros to automatically implement traits
//! required by the `deletion-guard`.
//!
//! ## Provided Derive Macros
//!
//! - `GuardedModel`: Automatically implements the `GuardedModel` trait for structs.
//!

#![doc(html_playground_url = "https://play.rust-lang.org")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod guarded_model;
mod utils;

/// Automatically implements the `GuardedModel` trait for a struct.
///
/// The derive generates the static relation registry of the model, so the guard never has
/// to discover relations at runtime, along with the optional filters and message.
///
/// # Struct attributes
///
/// All the options are given with `#[guarded(...)]`:
///
/// - `error = Type`: the error type of the model's relation lookups.
///   Defaults to `DeletionGuardError`. It must implement `From<DeletionGuardError>`.
///   `DeletionGuardError` only signals a refused deletion, so keep the default for models
///   whose relation lookups and conditions cannot fail; a model backed by a fallible store
///   must name the store's error type.
/// - `relations(a, b, ...)`: the relation accessors, in evaluation order.
///   Each accessor is a method `fn a(&self) -> Relation<'_, Error>`.
/// - `excluded(a, ...)`: the relations which never block the deletion.
/// - `included(a, ...)`: the only relations which may block the deletion.
/// - `message = "..."`: the message replacing any message of a refused deletion.
/// - `conditions`: the model implements `SpecificConditions` with the same error type.
///
/// # Field attributes
///
/// - `#[guarded(deletion_message)]` on an `Option<String>` field.
/// - `#[guarded(excluded_relations)]` and `#[guarded(included_relations)]` on a field
///   implementing `AsRelationNames` (`Vec<String>`, `Option<Vec<String>>`, ...).
/// - `#[guarded(policy)]` on a `DeletionPolicy` field, providing the filters and the message.
///
/// # What the macro generates
///
/// Given a struct like:
///
/// ```rust,ignore
/// #[derive(GuardedModel)]
/// #[guarded(error = StoreError, relations(posts, team), excluded(team))]
/// struct User {
///     id: u32,
///     #[guarded(deletion_message)]
///     deletion_message: Option<String>,
/// }
/// ```
///
/// The macro expands into:
///
/// ```rust,ignore
/// impl GuardedModel for User {
///     type Error = StoreError;
///
///     fn relations() -> &'static [RelationDef<Self>] {
///         &[
///             RelationDef { name: "posts", accessor: Self::posts },
///             RelationDef { name: "team", accessor: Self::team },
///         ]
///     }
///
///     fn excluded_relations(&self) -> Option<RelationNames<'_>> {
///         Some(RelationNames::Static(&["team"]))
///     }
///
///     fn deletion_message(&self) -> Option<&str> {
///         self.deletion_message.as_deref()
///     }
/// }
/// ```
///
/// # Errors
///
/// The macro will fail to expand if:
///
/// - The macro is applied to a non-struct item.
/// - A relation is declared twice.
/// - The same option is provided both by the struct attribute and by a field.
/// - An unknown option is given.
#[proc_macro_derive(GuardedModel, attributes(guarded))]
pub fn derive_guarded_model(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    self::guarded_model::guarded_model(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
