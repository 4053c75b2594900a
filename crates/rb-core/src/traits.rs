//! # Core Traits (Ports)
//!
//! Any plugin must implement these traits to be used by the binary.
//! Both are synchronous: the [`Blog`](crate::Blog) that owns them is guarded
//! by a single lock, so no implementation needs interior locking.

use crate::models::{Post, PostView};

/// Ordered collection of live posts, oldest-created first.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait PostRepo: Send + Sync {
    /// Every live post in creation order.
    fn list(&self) -> Vec<Post>;

    fn find(&self, id: &str) -> Option<Post>;

    /// Appends a post at the end of the collection.
    fn insert(&mut self, post: Post);

    /// Overwrites the stored post with the same id. Returns `false` if no
    /// such post is live.
    fn save(&mut self, post: Post) -> bool;

    fn remove(&mut self, id: &str) -> Option<Post>;
}

/// Mapping from slug to the content it currently renders.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait RouteTable: Send + Sync {
    /// Adds or overwrites the entry for `slug`.
    fn register(&mut self, slug: &str, post: PostView);

    /// Removes the entry for `slug`; a missing entry is not an error.
    fn unregister(&mut self, slug: &str) -> Option<PostView>;

    fn resolve(&self, slug: &str) -> Option<PostView>;
}
