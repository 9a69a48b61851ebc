/// The shape of a relation between two models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    /// The related model holds a reference to this model; at most one record.
    HasOne,
    /// The related model holds a reference to this model; any number of records.
    HasMany,
    /// This model holds a reference to its parent.
    BelongsTo,
    /// Many-to-many relation through a pivot table.
    BelongsToMany,
    /// One record reached through an intermediate model.
    HasOneThrough,
    /// Many records reached through an intermediate model.
    HasManyThrough,
    /// Polymorphic [`RelationKind::HasOne`].
    MorphOne,
    /// Polymorphic [`RelationKind::HasMany`].
    MorphMany,
    /// Polymorphic [`RelationKind::BelongsTo`].
    MorphTo,
    /// Polymorphic [`RelationKind::BelongsToMany`].
    MorphToMany,
}

impl RelationKind {
    /// Returns whether the relation points to a parent of this model.
    ///
    /// Deleting a child never affects its parent, so such relations never block a deletion.
    pub fn is_belongs_to(&self) -> bool {
        matches!(self, RelationKind::BelongsTo | RelationKind::MorphTo)
    }
}

/// A handle to a relation of a model instance.
///
/// The handle carries the [`RelationKind`] and a lookup telling whether the relation
/// currently has any associated record. The lookup may hit the data store, so it is only
/// run when [`Relation::exists`] is called.
pub struct Relation<'a, E> {
    kind: RelationKind,
    lookup: Box<dyn Fn() -> Result<bool, E> + 'a>,
}

impl<'a, E> Relation<'a, E> {
    /// Creates a new relation handle of the given kind.
    pub fn new<F>(kind: RelationKind, lookup: F) -> Self
    where
        F: Fn() -> Result<bool, E> + 'a,
    {
        Self {
            kind,
            lookup: Box::new(lookup),
        }
    }

    /// Creates a [`RelationKind::HasOne`] relation.
    pub fn has_one<F>(lookup: F) -> Self
    where
        F: Fn() -> Result<bool, E> + 'a,
    {
        Self::new(RelationKind::HasOne, lookup)
    }

    /// Creates a [`RelationKind::HasMany`] relation.
    pub fn has_many<F>(lookup: F) -> Self
    where
        F: Fn() -> Result<bool, E> + 'a,
    {
        Self::new(RelationKind::HasMany, lookup)
    }

    /// Creates a [`RelationKind::BelongsTo`] relation.
    pub fn belongs_to<F>(lookup: F) -> Self
    where
        F: Fn() -> Result<bool, E> + 'a,
    {
        Self::new(RelationKind::BelongsTo, lookup)
    }

    /// Creates a [`RelationKind::BelongsToMany`] relation.
    pub fn belongs_to_many<F>(lookup: F) -> Self
    where
        F: Fn() -> Result<bool, E> + 'a,
    {
        Self::new(RelationKind::BelongsToMany, lookup)
    }

    /// Returns the kind of the relation.
    pub fn kind(&self) -> RelationKind {
        self.kind
    }

    /// Returns whether the relation points to a parent of this model.
    pub fn is_belongs_to(&self) -> bool {
        self.kind.is_belongs_to()
    }

    /// Runs the lookup and returns whether at least one related record exists.
    pub fn exists(&self) -> Result<bool, E> {
        (self.lookup)()
    }
}

impl<E> std::fmt::Debug for Relation<'_, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Relation")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}
