//! Post mock type; a post has many comments and belongs to its author.

use std::rc::Rc;

use crate::prelude::{GuardedModel, Relation, SpecificCondition, SpecificConditions};
use crate::tests::{MemoryStore, StoreError};

/// A post, which cannot be deleted while published or while it has pending reviews.
#[derive(GuardedModel)]
#[guarded(error = StoreError, relations(comments, author), conditions)]
pub struct Post {
    pub id: u32,
    pub user_id: u32,
    pub published: bool,
    store: Rc<MemoryStore>,
}

impl Post {
    pub fn load(store: &Rc<MemoryStore>, id: u32) -> Self {
        Self {
            id,
            user_id: store.value("posts", id, "user_id").unwrap_or_default(),
            published: store.value("posts", id, "published") == Some(1),
            store: Rc::clone(store),
        }
    }

    pub fn comments(&self) -> Relation<'_, StoreError> {
        Relation::has_many(|| self.store.exists("comments", "post_id", self.id))
    }

    pub fn author(&self) -> Relation<'_, StoreError> {
        Relation::belongs_to(|| self.store.exists("users", "id", self.user_id))
    }
}

impl SpecificConditions for Post {
    type Error = StoreError;

    fn specific_conditions(&self) -> Vec<SpecificCondition<'_, Self::Error>> {
        vec![
            SpecificCondition::new(self.published, "Cannot delete a published post."),
            SpecificCondition::lazy(
                || self.store.exists("reviews", "post_id", self.id),
                "Cannot delete a post with pending reviews.",
            ),
        ]
    }
}
