//! Fixtures shared by the unit tests of this crate.

mod post;
mod user;

use std::cell::RefCell;
use std::rc::Rc;

pub use self::author::Author;
pub use self::post::Post;
pub use self::project::Project;
pub use self::store::{MemoryStore, StoreError};
pub use self::tag::Tag;
pub use self::team::Team;
pub use self::user::User;

/// Loads the fixtures into a new [`MemoryStore`].
///
/// - Team 1 is the default team; it has all the users as members.
/// - Team 2 has no members, but has project 2.
/// - User 1 has posts 1, 2 and 3; user 2 has a profile; user 3 has nothing.
/// - Post 1 is published and has a comment; post 2 has a pending review; post 3 is a draft.
/// - Project 1 has two tasks; project 2 has an activity.
pub fn load_fixtures() -> Rc<MemoryStore> {
    let store = MemoryStore::default();

    store.insert("teams", 1, &[]);
    store.insert("teams", 2, &[]);

    store.insert("users", 1, &[("team_id", 1)]);
    store.insert("users", 2, &[("team_id", 1)]);
    store.insert("users", 3, &[("team_id", 1)]);

    store.insert("profiles", 1, &[("user_id", 2)]);

    store.insert("posts", 1, &[("user_id", 1), ("published", 1)]);
    store.insert("posts", 2, &[("user_id", 1), ("published", 0)]);
    store.insert("posts", 3, &[("user_id", 1), ("published", 0)]);

    store.insert("comments", 1, &[("post_id", 1)]);
    store.insert("reviews", 1, &[("post_id", 2)]);

    store.insert("projects", 1, &[("team_id", 1)]);
    store.insert("projects", 2, &[("team_id", 2)]);
    store.insert("team_projects", 1, &[("team_id", 2), ("project_id", 2)]);

    store.insert("tasks", 1, &[("project_id", 1)]);
    store.insert("tasks", 2, &[("project_id", 1)]);
    store.insert("activities", 1, &[("subject_id", 2)]);

    store.shared()
}

/// Returns a warning sink recording the warnings into `warnings`.
pub fn recording_sink(warnings: &RefCell<Vec<String>>) -> impl Fn(&str) + '_ {
    move |message: &str| warnings.borrow_mut().push(message.to_string())
}
