//! # rb-store-memory
//!
//! Process-memory implementations of `PostRepo` and `RouteTable`.
//! Nothing survives a restart.

use std::collections::HashMap;

use log::trace;
use rb_core::models::{Post, PostView};
use rb_core::traits::{PostRepo, RouteTable};

/// Posts kept in a `Vec` in creation order.
#[derive(Debug, Default)]
pub struct MemoryPostRepo {
    posts: Vec<Post>,
}

impl MemoryPostRepo {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.posts.iter().position(|p| p.id() == id)
    }
}

impl PostRepo for MemoryPostRepo {
    fn list(&self) -> Vec<Post> {
        self.posts.clone()
    }

    fn find(&self, id: &str) -> Option<Post> {
        self.posts.iter().find(|p| p.id() == id).cloned()
    }

    fn insert(&mut self, post: Post) {
        self.posts.push(post);
    }

    /// Replaces in place so the post keeps its position in the listing.
    fn save(&mut self, post: Post) -> bool {
        match self.position(post.id()) {
            Some(i) => {
                self.posts[i] = post;
                true
            }
            None => false,
        }
    }

    fn remove(&mut self, id: &str) -> Option<Post> {
        let i = self.position(id)?;
        Some(self.posts.remove(i))
    }
}

/// Slug → content map backing the catch-all post route.
#[derive(Debug, Default)]
pub struct MemoryRouteTable {
    routes: HashMap<String, PostView>,
}

impl MemoryRouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl RouteTable for MemoryRouteTable {
    fn register(&mut self, slug: &str, post: PostView) {
        trace!("register {} -> {}", slug, post.id);
        self.routes.insert(slug.to_string(), post);
    }

    fn unregister(&mut self, slug: &str) -> Option<PostView> {
        trace!("unregister {}", slug);
        self.routes.remove(slug)
    }

    fn resolve(&self, slug: &str) -> Option<PostView> {
        self.routes.get(slug).cloned()
    }
}
