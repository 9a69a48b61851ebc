use deletion_guard_api::prelude::{GuardedModel, RelationNames};

/// Inspects the relations of a model, looking for the ones which block its deletion.
pub struct RelationsInspector<'m, M>
where
    M: GuardedModel,
{
    model: &'m M,
    excluded: Option<RelationNames<'m>>,
    included: Option<RelationNames<'m>>,
}

impl<'m, M> RelationsInspector<'m, M>
where
    M: GuardedModel,
{
    /// Creates a new relations inspector for the given model.
    pub fn new(model: &'m M) -> Self {
        Self {
            model,
            excluded: model.excluded_relations(),
            included: model.included_relations(),
        }
    }

    /// Returns the names of the relations blocking the deletion, in declaration order.
    ///
    /// A relation blocks the deletion when:
    /// - it is not filtered out by the excluded and included relations;
    /// - it is not a belongs-to relation;
    /// - it has at least one related record.
    ///
    /// Filtered out relations are never accessed, and belongs-to relations are never
    /// looked up, so they don't cost a query to the data store.
    pub fn blocking_relations(&self) -> Result<Vec<&'static str>, M::Error> {
        let mut blocking = Vec::new();
        for def in M::relations() {
            if blocking.contains(&def.name) || !self.is_candidate(def.name) {
                continue;
            }

            let relation = def.relation(self.model);
            if !relation.is_belongs_to() && relation.exists()? {
                blocking.push(def.name);
            }
        }

        Ok(blocking)
    }

    /// Returns whether the relation passes the excluded and included relations filters.
    ///
    /// Exclusion wins when a relation is both excluded and included.
    fn is_candidate(&self, name: &str) -> bool {
        if self.excluded.is_some_and(|excluded| excluded.contains(name)) {
            return false;
        }
        self.included.is_none_or(|included| included.contains(name))
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::tests::{Team, User, load_fixtures};

    #[test]
    fn test_should_find_no_blocking_relations() {
        let store = load_fixtures();
        let user = User::load(&store, 3);

        let inspector = RelationsInspector::new(&user);
        let blocking = inspector.blocking_relations().expect("lookup failed");
        assert!(blocking.is_empty());
    }

    #[test]
    fn test_should_ignore_belongs_to_relation_with_parent() {
        let store = load_fixtures();
        // user 2 has a profile and belongs to team 1
        let user = User::load(&store, 2);

        let blocking = RelationsInspector::new(&user)
            .blocking_relations()
            .expect("lookup failed");
        assert_eq!(blocking, vec!["profile"]);
    }

    #[test]
    fn test_should_tell_candidates() {
        let store = load_fixtures();
        let mut user = User::load(&store, 1);
        user.excluded_relations = Some(vec!["team".to_string()]);
        user.included_relations = Some(vec!["posts".to_string(), "team".to_string()]);

        let inspector = RelationsInspector::new(&user);
        assert!(inspector.is_candidate("posts"));
        assert!(!inspector.is_candidate("team"));
        assert!(!inspector.is_candidate("profile"));
    }

    #[test]
    fn test_should_take_every_relation_as_candidate_without_filters() {
        let store = load_fixtures();
        let team = Team::load(&store, 1, Default::default());

        let inspector = RelationsInspector::new(&team);
        assert!(inspector.is_candidate("members"));
        assert!(inspector.is_candidate("projects"));
    }

    #[test]
    fn test_should_evaluate_relation_declared_twice_once() {
        let store = load_fixtures();
        let user = crate::tests::Author::load(&store, 1);

        let blocking = RelationsInspector::new(&user)
            .blocking_relations()
            .expect("lookup failed");
        assert_eq!(blocking, vec!["posts"]);
        assert_eq!(store.lookups(), vec!["posts"]);
    }
}
