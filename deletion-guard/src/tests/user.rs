//! User mock type; a user has many posts, has one profile and belongs to a team.

use std::rc::Rc;

use crate::prelude::{GuardedModel, Relation};
use crate::tests::{MemoryStore, StoreError};

/// A user, whose filters and message may be changed by each test.
#[derive(GuardedModel)]
#[guarded(error = StoreError, relations(posts, profile, team))]
pub struct User {
    pub id: u32,
    pub team_id: u32,
    #[guarded(deletion_message)]
    pub deletion_message: Option<String>,
    #[guarded(excluded_relations)]
    pub excluded_relations: Option<Vec<String>>,
    #[guarded(included_relations)]
    pub included_relations: Option<Vec<String>>,
    store: Rc<MemoryStore>,
}

impl User {
    pub fn load(store: &Rc<MemoryStore>, id: u32) -> Self {
        Self {
            id,
            team_id: store.value("users", id, "team_id").unwrap_or_default(),
            deletion_message: None,
            excluded_relations: None,
            included_relations: None,
            store: Rc::clone(store),
        }
    }

    pub fn posts(&self) -> Relation<'_, StoreError> {
        Relation::has_many(|| self.store.exists("posts", "user_id", self.id))
    }

    pub fn profile(&self) -> Relation<'_, StoreError> {
        Relation::has_one(|| self.store.exists("profiles", "user_id", self.id))
    }

    pub fn team(&self) -> Relation<'_, StoreError> {
        Relation::belongs_to(|| self.store.exists("teams", "id", self.team_id))
    }
}

#[allow(clippy::module_inception)]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::{RelationKind, RelationNames};
    use crate::tests::load_fixtures;

    #[test]
    fn test_should_derive_relations() {
        let names = User::relations()
            .iter()
            .map(|def| def.name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["posts", "profile", "team"]);

        let store = load_fixtures();
        let user = User::load(&store, 1);
        let kinds = User::relations()
            .iter()
            .map(|def| def.relation(&user).kind())
            .collect::<Vec<_>>();
        assert_eq!(
            kinds,
            vec![
                RelationKind::HasMany,
                RelationKind::HasOne,
                RelationKind::BelongsTo
            ]
        );
    }

    #[test]
    fn test_should_derive_field_options() {
        let store = load_fixtures();
        let mut user = User::load(&store, 1);
        assert!(user.excluded_relations().is_none());
        assert!(user.included_relations().is_none());
        assert!(user.deletion_message().is_none());
        assert!(user.conditions().is_none());

        user.excluded_relations = Some(vec!["team".to_string()]);
        user.included_relations = Some(vec![]);
        user.deletion_message = Some("Custom".to_string());

        let excluded = user.excluded_relations.clone().expect("should be set");
        assert_eq!(
            GuardedModel::excluded_relations(&user),
            Some(RelationNames::from(&excluded))
        );
        assert!(
            GuardedModel::included_relations(&user).is_some_and(|names| names.is_empty())
        );
        assert_eq!(GuardedModel::deletion_message(&user), Some("Custom"));
    }
}
