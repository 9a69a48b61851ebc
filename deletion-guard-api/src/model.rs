//! This module exposes all the types a model implements or returns in order to be guarded
//! against deletion.

mod condition;
mod policy;
mod relation;

pub use self::condition::{SpecificCondition, SpecificConditions};
pub use self::policy::DeletionPolicy;
pub use self::relation::{Relation, RelationKind};
use crate::error::DeletionGuardError;

/// This trait is implemented by every model which must not be deleted while it still has
/// related records, or while one of its specific conditions holds.
///
/// Relations are not discovered at runtime: each model declares its own relation accessors
/// with [`GuardedModel::relations`]. Usually the trait is implemented with
/// `#[derive(GuardedModel)]`.
pub trait GuardedModel: Sized + 'static {
    /// The error type returned by the model's relation lookups and condition checks.
    ///
    /// A refused deletion is converted into this type as well.
    type Error: From<DeletionGuardError>;

    /// Returns the relation accessors declared by this model, in declaration order.
    fn relations() -> &'static [RelationDef<Self>];

    /// Returns the specific conditions provider of the model, if the model has any.
    fn conditions(&self) -> Option<&dyn SpecificConditions<Error = Self::Error>> {
        None
    }

    /// Returns the names of the relations which must never block the deletion.
    fn excluded_relations(&self) -> Option<RelationNames<'_>> {
        None
    }

    /// Returns the names of the only relations which may block the deletion.
    fn included_relations(&self) -> Option<RelationNames<'_>> {
        None
    }

    /// Returns the message which replaces any message of a refused deletion.
    fn deletion_message(&self) -> Option<&str> {
        None
    }
}

/// Defines a relation accessor of a [`GuardedModel`].
pub struct RelationDef<M>
where
    M: GuardedModel,
{
    /// Name of the relation, as reported in the deletion message.
    pub name: &'static str,
    /// Function returning the relation handle for a model instance.
    pub accessor: for<'m> fn(&'m M) -> Relation<'m, M::Error>,
}

impl<M> RelationDef<M>
where
    M: GuardedModel,
{
    /// Creates a new relation definition.
    pub const fn new(
        name: &'static str,
        accessor: for<'m> fn(&'m M) -> Relation<'m, M::Error>,
    ) -> Self {
        Self { name, accessor }
    }

    /// Invokes the accessor on the given model.
    pub fn relation<'m>(&self, model: &'m M) -> Relation<'m, M::Error> {
        (self.accessor)(model)
    }
}

impl<M> Clone for RelationDef<M>
where
    M: GuardedModel,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for RelationDef<M> where M: GuardedModel {}

impl<M> std::fmt::Debug for RelationDef<M>
where
    M: GuardedModel,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelationDef")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A borrowed list of relation names, used to filter relations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationNames<'a> {
    /// Names known at compile time.
    Static(&'a [&'a str]),
    /// Names loaded at runtime.
    Owned(&'a [String]),
}

impl RelationNames<'_> {
    /// Returns whether the list contains the given relation name.
    pub fn contains(&self, name: &str) -> bool {
        match self {
            RelationNames::Static(names) => names.iter().any(|n| *n == name),
            RelationNames::Owned(names) => names.iter().any(|n| n == name),
        }
    }

    /// Returns the number of names in the list.
    pub fn len(&self) -> usize {
        match self {
            RelationNames::Static(names) => names.len(),
            RelationNames::Owned(names) => names.len(),
        }
    }

    /// Returns whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> From<&'a [&'a str]> for RelationNames<'a> {
    fn from(names: &'a [&'a str]) -> Self {
        RelationNames::Static(names)
    }
}

impl<'a> From<&'a [String]> for RelationNames<'a> {
    fn from(names: &'a [String]) -> Self {
        RelationNames::Owned(names)
    }
}

impl<'a> From<&'a Vec<String>> for RelationNames<'a> {
    fn from(names: &'a Vec<String>) -> Self {
        RelationNames::Owned(names.as_slice())
    }
}

/// Types which may be used as a model field holding a list of relation names.
///
/// `None` means the list is not defined, which is not the same as an empty list.
pub trait AsRelationNames {
    /// Returns the relation names, if defined.
    fn as_relation_names(&self) -> Option<RelationNames<'_>>;
}

impl AsRelationNames for Vec<String> {
    fn as_relation_names(&self) -> Option<RelationNames<'_>> {
        Some(RelationNames::Owned(self))
    }
}

impl AsRelationNames for Vec<&'static str> {
    fn as_relation_names(&self) -> Option<RelationNames<'_>> {
        Some(RelationNames::Static(self))
    }
}

impl<T> AsRelationNames for Option<T>
where
    T: AsRelationNames,
{
    fn as_relation_names(&self) -> Option<RelationNames<'_>> {
        self.as_ref().and_then(T::as_relation_names)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::tests::{Repository, User};

    #[test]
    fn test_should_get_relations_in_declaration_order() {
        let names = User::relations()
            .iter()
            .map(|def| def.name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["posts", "profile", "team"]);
    }

    #[test]
    fn test_should_invoke_relation_accessor() {
        let repository = Repository::default().with_posts(1, 2).shared();
        let user = User::new(1, &repository);

        let posts = User::relations()[0].relation(&user);
        assert_eq!(posts.kind(), RelationKind::HasMany);
        assert!(posts.exists().expect("lookup failed"));

        let profile = User::relations()[1].relation(&user);
        assert_eq!(profile.kind(), RelationKind::HasOne);
        assert!(!profile.exists().expect("lookup failed"));
    }

    #[test]
    fn test_should_have_no_optional_capabilities_by_default() {
        let repository = Repository::default().shared();
        let user = User::new(1, &repository);
        assert!(user.conditions().is_none());
        assert!(user.excluded_relations().is_none());
        assert!(user.included_relations().is_none());
        assert!(user.deletion_message().is_none());
    }

    #[test]
    fn test_should_check_relation_names_membership() {
        let static_names: &[&str] = &["posts", "profile"];
        let names = RelationNames::from(static_names);
        assert!(names.contains("posts"));
        assert!(!names.contains("team"));
        assert_eq!(names.len(), 2);

        let owned = vec!["team".to_string()];
        let names = RelationNames::from(&owned);
        assert!(names.contains("team"));
        assert!(!names.contains("posts"));
    }

    #[test]
    fn test_should_tell_undefined_from_empty_names() {
        let undefined: Option<Vec<String>> = None;
        assert!(undefined.as_relation_names().is_none());

        let empty: Option<Vec<String>> = Some(vec![]);
        let names = empty.as_relation_names().expect("should be defined");
        assert!(names.is_empty());

        let static_names: Vec<&'static str> = vec!["posts"];
        assert!(
            static_names
                .as_relation_names()
                .is_some_and(|names| names.contains("posts"))
        );
    }
}
